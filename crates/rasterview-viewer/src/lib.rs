//! # RasterView Viewer
//!
//! Interactive image viewport: displays a raster at any zoom factor, lets
//! the user drag out a rectangular selection, composites pluggable overlays
//! on top of the image and keeps an undo/redo history of viewer state.
//!
//! ## Core Components
//!
//! - **Viewport**: screen/pixel conversion and fit-to-panel scale
//! - **Overlays / Paintlets**: pluggable renderers with snapshot-on-iterate registries
//! - **Selection**: press/drag/release state machine emitting pixel rectangles and traces
//! - **Shape painters**: how the live selection is drawn (box or lasso)
//! - **Renderer**: fixed-order frame composition on a `tiny-skia` surface
//! - **History**: bounded undo/redo stacks of viewer snapshots
//! - **Viewer**: the façade tying it all together
//!
//! ## Architecture
//!
//! ```text
//! Viewer
//!   ├── Viewport (zoom, panel size)
//!   ├── OverlayRegistry / PaintletRegistry
//!   ├── SelectionController + listener registries
//!   ├── PaintPipeline -> SelectionShapePainter, Surface
//!   ├── History<ViewerState>
//!   └── command queue (background loads)
//! ```

pub mod codec;
pub mod dispatch;
pub mod history;
pub mod input;
pub mod interaction;
pub mod overlay;
pub mod paintlet;
pub mod raster;
pub mod registry;
pub mod renderer;
pub mod selection;
pub mod shape;
pub mod surface;
pub mod view;
pub mod viewer;
pub mod viewport;

pub use codec::{DefaultCodec, ImageReader, ImageWriter, LoadedImage};
pub use dispatch::{CommandSender, ViewerCommand};
pub use history::{History, UndoPoint, ViewerState};
pub use input::{Modifiers, MouseButton, PointerEvent};
pub use interaction::{InteractionEvent, InteractionFilter, InteractionLog, KindFilter};
pub use overlay::{Overlay, OverlayRegistry};
pub use paintlet::{Paintlet, PaintletRegistry};
pub use raster::Image;
pub use registry::Registry;
pub use renderer::PaintPipeline;
pub use selection::{
    LeftClickEvent, LeftClickListener, SelectionController, SelectionEvent, SelectionListener,
    SelectionPhase, SelectionUpdate,
};
pub use shape::{PolygonPainter, RectanglePainter, SelectionShape, SelectionShapePainter};
pub use surface::Surface;
pub use view::{PanelView, ViewerId};
pub use viewer::Viewer;
pub use viewport::{resolve_scale, to_pixel, to_screen, Viewport, WheelZoom, Zoom};
