use bevy::math::IVec3;

//visits x fastest, then y, then z
pub struct VolumeIterator {
    x_len: i32,
    y_len: i32,
    z_len: i32,
    x_i: i32,
    y_i: i32,
    z_i: i32,
    done: bool,
}

impl VolumeIterator {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self {
            x_len: x as i32,
            y_len: y as i32,
            z_len: z as i32,
            x_i: 0,
            y_i: 0,
            z_i: 0,
            done: x == 0 || y == 0 || z == 0,
        }
    }

    pub fn from_volume(volume: Volume) -> impl Iterator<Item = IVec3> {
        let size = volume.size();
        Self {
            x_len: size.x,
            y_len: size.y,
            z_len: size.z,
            x_i: 0,
            y_i: 0,
            z_i: 0,
            done: size.x <= 0 || size.y <= 0 || size.z <= 0,
        }
        .map(move |offset| volume.min_corner + offset)
    }
}

impl Iterator for VolumeIterator {
    type Item = IVec3;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let ret = Some(IVec3::new(self.x_i, self.y_i, self.z_i));
        self.x_i += 1;
        if self.x_i >= self.x_len {
            self.y_i += 1;
            self.x_i = 0;
        }
        if self.y_i >= self.y_len {
            self.z_i += 1;
            self.y_i = 0;
        }
        if self.z_i >= self.z_len {
            self.done = true;
        }
        ret
    }
}

//visits layers from the top of the volume down. inside a layer, x is fastest, then z
pub struct TopDownVolumeIterator {
    x_len: i32,
    z_len: i32,
    x_i: i32,
    y_i: i32,
    z_i: i32,
    done: bool,
}

impl TopDownVolumeIterator {
    pub fn from_volume(volume: Volume) -> impl Iterator<Item = IVec3> {
        let size = volume.size();
        Self {
            x_len: size.x,
            z_len: size.z,
            x_i: 0,
            y_i: size.y - 1,
            z_i: 0,
            done: size.x <= 0 || size.y <= 0 || size.z <= 0,
        }
        .map(move |offset| volume.min_corner + offset)
    }
}

impl Iterator for TopDownVolumeIterator {
    type Item = IVec3;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let ret = Some(IVec3::new(self.x_i, self.y_i, self.z_i));
        self.x_i += 1;
        if self.x_i >= self.x_len {
            self.z_i += 1;
            self.x_i = 0;
        }
        if self.z_i >= self.z_len {
            self.y_i -= 1;
            self.z_i = 0;
        }
        if self.y_i < 0 {
            self.done = true;
        }
        ret
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Volume {
    pub min_corner: IVec3,
    pub max_corner: IVec3,
}

impl Volume {
    pub fn new(min_corner: IVec3, max_corner_exclusive: IVec3) -> Self {
        Volume {
            min_corner,
            max_corner: max_corner_exclusive,
        }
    }

    pub fn new_inclusive(min_corner: IVec3, max_corner_inclusive: IVec3) -> Self {
        Volume {
            min_corner,
            max_corner: max_corner_inclusive + IVec3::ONE,
        }
    }

    pub fn from_extents(origin: IVec3, extents: IVec3) -> Self {
        Self::new(origin, origin + extents)
    }

    pub fn contains_point(&self, point: IVec3) -> bool {
        self.min_corner.cmple(point).all() && self.max_corner.cmpgt(point).all()
    }

    pub fn volume(&self) -> i32 {
        let size = self.size().max(IVec3::ZERO);
        size.x * size.y * size.z
    }

    pub fn size(&self) -> IVec3 {
        self.max_corner - self.min_corner
    }

    pub fn iter(self) -> impl Iterator<Item = IVec3> {
        VolumeIterator::from_volume(self)
    }

    pub fn iter_top_down(self) -> impl Iterator<Item = IVec3> {
        TopDownVolumeIterator::from_volume(self)
    }
}
