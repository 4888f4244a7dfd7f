pub(crate) mod drawer_form;
pub(crate) mod toggle_arrow;
