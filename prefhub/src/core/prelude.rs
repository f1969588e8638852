#[allow(unused_imports)]
pub use crate::form::*;
pub use crate::core::logging::init_logger;
pub use crate::core::logging::{debug, error, info, trace, warn};
pub use crate::core::util::HashMap;
pub use crate::core::util::HashSet;
pub use crate::core::util::bool_to_f64;
pub use crate::core::util::format_number;
pub use crate::core::util::lerp;
pub use crate::i18n::Translator;
#[allow(unused_imports)]
pub use crate::runtime::*;
#[allow(unused_imports)]
pub use crate::settings::*;
pub use crate::ternary;
pub use crate::warn_once;
