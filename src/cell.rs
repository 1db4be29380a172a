/// The state of a single grid position.
///
/// A cell is either dead or alive, nothing else. The discriminants are pinned
/// so that `Dead` converts to `0` and `Alive` to `1`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    pub fn from_alive(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell as u8
    }
}
