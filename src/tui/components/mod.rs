pub mod help_popup;
pub mod pool_pane;
pub mod result_popup;
pub mod stats_pane;
pub mod status_bar;
pub mod tab_bar;
pub mod teams_pane;
pub mod wheel_pane;
