use crate::catalog::interface::SpotCatalog;

#[derive(Clone)]
pub struct AppContext<SC: SpotCatalog> {
    pub spots: SC,
}
