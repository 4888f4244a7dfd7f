//! Sample article rendered with the applied display options.

pub(crate) mod view;
