pub(crate) mod article_params;
