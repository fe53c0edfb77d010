pub mod alert;
pub mod button;
pub mod dialog;
pub mod dropdown_menu;
pub mod icons;
pub mod input;
pub mod separator;
pub mod sidebar;

pub use alert::{Alert, AlertVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use dialog::{AlertDialog, Dialog};
pub use dropdown_menu::DropdownMenu;
pub use input::{Input, Label};
pub use separator::Separator;
pub use sidebar::{use_sidebar, SidebarContext, SidebarProvider};
