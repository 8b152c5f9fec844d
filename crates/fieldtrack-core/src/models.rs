pub mod breadcrumb;
pub mod finding;
pub mod job;
pub mod window;

pub use breadcrumb::{Coordinate, GeoPoint, ReferenceLocation};
pub use finding::{AnalysisResult, LatePunchOutFinding, LateStartFinding};
pub use job::{JobSite, Route};
pub use window::MovementWindow;
