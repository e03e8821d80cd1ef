pub mod button;
pub mod card;
pub mod feature_list;
pub mod form;
pub mod input;
pub mod loading;
pub mod page_header;

pub use button::*;
pub use card::*;
pub use feature_list::*;
pub use form::*;
pub use input::*;
pub use loading::*;
pub use page_header::*;
