//! Annotated waypoint sequences produced by Cartesian resolution.

use crate::motion_traits::Pose;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct WaypointFlags: u32 {
        /// Intermediate pose inserted by linear interpolation.
        const INTERPOLATED = 0b00000001;
        /// The final, fully resolved target pose of the request.
        const TARGET = 0b00000010;
    }
}

/// One pose of a resolved Cartesian goal, with flags telling interpolated
/// intermediates apart from the request target. Translation in millimeters.
#[derive(Clone, Copy)]
pub struct Waypoint {
    pub pose: Pose,
    pub flags: WaypointFlags,
}

impl Waypoint {
    pub fn new(pose: Pose, flags: WaypointFlags) -> Self {
        Waypoint { pose, flags }
    }

    pub fn is_target(&self) -> bool {
        self.flags.contains(WaypointFlags::TARGET)
    }
}

impl fmt::Debug for Waypoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn flag_representation(flags: &WaypointFlags) -> String {
            const FLAG_MAP: &[(WaypointFlags, &str)] = &[
                (WaypointFlags::INTERPOLATED, "INTERPOLATED"),
                (WaypointFlags::TARGET, "TARGET"),
            ];

            FLAG_MAP
                .iter()
                .filter(|(flag, _)| flags.contains(*flag))
                .map(|(_, name)| *name)
                .collect::<Vec<_>>()
                .join(" | ")
        }

        let translation = self.pose.translation.vector;
        let rotation = self.pose.rotation;

        write!(
            formatter,
            "{}: [{:.3}, {:.3}, {:.3}], quat {{ w: {:.3}, i: {:.3}, j: {:.3}, k: {:.3} }}",
            flag_representation(&self.flags),
            translation.x,
            translation.y,
            translation.z,
            rotation.w,
            rotation.i,
            rotation.j,
            rotation.k
        )
    }
}
