pub mod common_toast;
pub mod filter_bar;
pub mod torneo_card;
pub mod torneo_grid;
pub mod torneo_modal;
