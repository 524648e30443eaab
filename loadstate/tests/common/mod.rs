use loadstate::{LoadAction, LoadState, State};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct CatalogState {
    pub titles: LoadState<Vec<String>, String>,
    pub selected: Option<usize>,
}

impl State for CatalogState {}

#[derive(Clone, Debug, PartialEq)]
pub enum CatalogAction {
    Titles(LoadAction<Vec<String>, String>),
    Select(usize),
}

impl CatalogAction {
    pub fn titles(self) -> Option<LoadAction<Vec<String>, String>> {
        match self {
            CatalogAction::Titles(action) => Some(action),
            _ => None,
        }
    }
}
