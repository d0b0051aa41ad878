use std::str::FromStr;

use ahash::AHashMap;

use crate::error::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    #[default]
    Soccar,
    Hoops,
    Heatseeker,
    Snowday,
    /// Recognized, but its hexagonal tile floor has no geometry here.
    Dropshot,
    /// Soccar without the arena hull. The ball and cars fall forever.
    TheVoid,
}

impl GameMode {
    pub const ALL: [Self; 6] = [
        Self::Soccar,
        Self::Hoops,
        Self::Heatseeker,
        Self::Snowday,
        Self::Dropshot,
        Self::TheVoid,
    ];

    const NAMES: [&'static str; 6] = ["soccar", "hoops", "heatseeker", "snowday", "dropshot", "void"];

    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// The mode whose collision meshes this mode is played on.
    #[must_use]
    pub const fn mesh_mode(self) -> Self {
        match self {
            Self::Heatseeker | Self::Snowday => Self::Soccar,
            _ => self,
        }
    }

    /// Hashes of the meshes dumped from the real arenas, each mapped to a load count of 0.
    pub(crate) fn get_hashes(self) -> AHashMap<u32, u32> {
        macro_rules! zero_iter {
            ($($i:literal),+) => {
                [
                    $(($i, 0)),+
                ].into_iter()
            }
        }

        match self.mesh_mode() {
            Self::Soccar => zero_iter![
                0xA160_BAF9,
                0x2811_EEE8,
                0xB81A_C8B9,
                0x7603_58D3,
                0x73AE_4940,
                0x918F_4A4E,
                0x1F8E_E550,
                0x255B_A8C1,
                0x14B8_4668,
                0xEC75_9EBF,
                0x94FB_0D5C,
                0xDEA0_7102,
                0xBD4F_BEA8,
                0x39A4_7F63,
                0x3D79_D25D,
                0xD84C_7A68
            ]
            .collect(),
            Self::Hoops => zero_iter![
                0x72F2_359E,
                0x5ED1_4A26,
                0xFD5A_0D07,
                0x92AF_A5B5,
                0x0E41_33C7,
                0x399E_8B5F,
                0xBB9D_4FB5,
                0x8C87_FB93,
                0x1CFD_0E16,
                0xE19E_1DF6,
                0x9CA1_79DC,
                0x16F3_CC19
            ]
            .collect(),
            _ => AHashMap::new(),
        }
    }
}

impl FromStr for GameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| Error::UnknownMode(s.to_owned()))
    }
}
