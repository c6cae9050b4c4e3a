// src/config/state.rs
use super::options::AppOptions;

/// Which of the two panel screens is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Authentication,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub view: View,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            view: View::Dashboard,
            window_w: 1000,
            window_h: 680,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
