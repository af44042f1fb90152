mod icons;
mod layout;
mod spinner;

pub use icons::{Icon, IconKind};
pub use layout::Layout;
pub use spinner::{Spinner, SpinnerSize};
