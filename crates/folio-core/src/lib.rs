pub mod carousel;
pub mod config;
pub mod content;
pub mod counter;
pub mod error;
pub mod observe;
pub mod reveal;

pub use carousel::CarouselCursor;
pub use config::{AppConfig, ThemeMode};
pub use content::{CounterSpec, PortfolioContent};
pub use counter::{CounterAnimator, CounterPhase};
pub use error::{Error, Result};
pub use observe::{ObserveConfig, Token, ViewportObserver};
pub use reveal::RevealState;
