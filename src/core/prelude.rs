#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    util::{
        bounds::{Aabb, Margin, Plane, Rect2},
        colour::Color,
        linalg,
        linalg::{Axis, Vector2, Vector3},
        real,
        rotation::{Basis, Quat},
        transform::{Transform2D, Transform3D},
    },
};
