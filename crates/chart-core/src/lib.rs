// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the public API for loading, rendering and interaction.

pub mod axis;
pub mod chart;
pub mod config;
pub mod date;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hit;
pub mod interaction;
pub mod loader;
pub mod scale;
pub mod scene;
pub mod series;
pub mod state;
pub mod svg;
pub mod theme;
pub mod types;
pub mod view;
#[cfg(feature = "png")]
pub mod raster;
#[cfg(feature = "png")]
pub mod text;

pub use axis::{Axis, AxisConfig, FinalTick, Tick};
pub use chart::Chart;
pub use config::{ChartConfig, RenderOptions, TooltipConfig};
pub use date::YearMonth;
pub use error::{ChartError, ConfigError, DateLabelError, LoadError};
pub use geometry::Point;
pub use hit::{hit_test, PointerTracker};
pub use interaction::{nearest_index, Dispatcher, EventKind, HostFrame, Layer, PointerEvent};
pub use loader::{load_path, load_reader, load_str, LoadOptions};
pub use scene::{PathRole, Scene};
pub use series::{Dataset, Record, Series};
pub use state::{HitConfig, HitMode, SelectionState};
pub use theme::Theme;
pub use view::{Marker, Tooltip, TooltipKind, ViewState};
