//! Instance data for disk rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::{Disk, DiskKind};

/// One disk as a renderer sees it
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DiskInstance {
    pub position: [f32; 2],
    pub radius: f32,
    /// `DiskKind::code`: 0 silver, 1 gold, 2..=7 figures
    pub kind: u32,
}

impl DiskInstance {
    pub const fn new(x: f32, y: f32, radius: f32, kind: u32) -> Self {
        Self {
            position: [x, y],
            radius,
            kind,
        }
    }

    /// `None` for an empty slot
    pub fn from_disk(disk: &Disk) -> Option<Self> {
        let kind = disk.kind?;
        Some(Self::new(disk.pos.x, disk.pos.y, disk.radius, kind.code()))
    }

    /// Tint for this instance's kind
    pub fn color(&self) -> [f32; 4] {
        colors::for_code(self.kind)
    }
}

impl From<(DiskKind, glam::Vec2)> for DiskInstance {
    fn from((kind, pos): (DiskKind, glam::Vec2)) -> Self {
        Self::new(pos.x, pos.y, kind.radius(), kind.code())
    }
}

/// Colors for game elements
pub mod colors {
    pub const SILVER: [f32; 4] = [0.75, 0.75, 0.78, 1.0];
    pub const GOLD: [f32; 4] = [0.95, 0.78, 0.2, 1.0];
    pub const FIGURE: [f32; 4] = [0.2, 0.2, 0.2, 1.0];

    pub fn for_code(code: u32) -> [f32; 4] {
        match code {
            0 => SILVER,
            1 => GOLD,
            _ => FIGURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::FigureId;
    use glam::Vec2;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<DiskInstance>(), 16);
        let instances = [
            DiskInstance::new(1.0, 2.0, 0.3, 1),
            DiskInstance::new(-1.0, 0.5, 0.36, 4),
        ];
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 32);
    }

    #[test]
    fn test_from_disk() {
        let kind = DiskKind::Figure(FigureId::wrapping(2));
        let disk = Disk::new(kind, Vec2::new(0.5, -1.0));
        let inst = DiskInstance::from_disk(&disk).unwrap();
        assert_eq!(inst.position, [0.5, -1.0]);
        assert_eq!(inst.radius, FIGURE_RADIUS);
        assert_eq!(inst.kind, 4);
        assert_eq!(inst.color(), colors::FIGURE);

        assert!(DiskInstance::from_disk(&Disk::EMPTY).is_none());
    }
}
