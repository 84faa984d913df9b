//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{
    current_route, redirect, sign_in_action, sign_out_action, sign_up_action, use_session,
    Session, SessionProvider,
};

mod toast;
pub use toast::{dismiss_toast, push_toast, use_toasts, Toast, ToastLevel, ToastProvider, Toasts};

mod navbar;
pub use navbar::Navbar;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod auth_dialog;
pub use auth_dialog::AuthDialog;

mod goal_dialog;
pub use goal_dialog::NewGoalDialog;

mod category_dialog;
pub use category_dialog::NewCategoryDialog;

mod category_card;
pub use category_card::CategoryCard;

mod profile_header;
pub use profile_header::ProfileHeader;

mod profile_form;
pub use profile_form::ProfileForm;
