use article_params::{ArticleOptionSet, OptionCatalog};

/// Read-only data the drawer view renders from.
pub(crate) struct ArticleParamsViewModel<'a> {
    pub(crate) catalog: &'a OptionCatalog,
    pub(crate) draft: ArticleOptionSet,
    pub(crate) is_open: bool,
    pub(crate) is_dirty: bool,
}
