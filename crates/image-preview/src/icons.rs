//! Built-in icon catalog.
//!
//! The classic five by five gallery. Every icon is a named image string
//! that decodes to a 5x5 grid with at least one lit cell.

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::grid::PixelGrid;
use crate::image_string::decode;

/// A named built-in image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Heart,
    SmallHeart,
    Happy,
    Smile,
    Sad,
    Confused,
    Angry,
    Asleep,
    Surprised,
    Silly,
    Fabulous,
    Meh,
    Yes,
    No,
    Triangle,
    LeftTriangle,
    Chessboard,
    Diamond,
    SmallDiamond,
    Square,
    SmallSquare,
    Rabbit,
    Cow,
    QuarterNote,
    EighthNote,
    Pitchfork,
    Xmas,
    Pacman,
    Target,
    TShirt,
    Rollerskate,
    Duck,
    House,
    Tortoise,
    Butterfly,
    StickFigure,
    Ghost,
    Sword,
    Giraffe,
    Skull,
    Umbrella,
    Snake,
}

impl Icon {
    /// Every icon in gallery order.
    pub const ALL: [Icon; 42] = [
        Icon::Heart,
        Icon::SmallHeart,
        Icon::Happy,
        Icon::Smile,
        Icon::Sad,
        Icon::Confused,
        Icon::Angry,
        Icon::Asleep,
        Icon::Surprised,
        Icon::Silly,
        Icon::Fabulous,
        Icon::Meh,
        Icon::Yes,
        Icon::No,
        Icon::Triangle,
        Icon::LeftTriangle,
        Icon::Chessboard,
        Icon::Diamond,
        Icon::SmallDiamond,
        Icon::Square,
        Icon::SmallSquare,
        Icon::Rabbit,
        Icon::Cow,
        Icon::QuarterNote,
        Icon::EighthNote,
        Icon::Pitchfork,
        Icon::Xmas,
        Icon::Pacman,
        Icon::Target,
        Icon::TShirt,
        Icon::Rollerskate,
        Icon::Duck,
        Icon::House,
        Icon::Tortoise,
        Icon::Butterfly,
        Icon::StickFigure,
        Icon::Ghost,
        Icon::Sword,
        Icon::Giraffe,
        Icon::Skull,
        Icon::Umbrella,
        Icon::Snake,
    ];

    /// Catalog name in kebab-case.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Heart => "heart",
            Icon::SmallHeart => "small-heart",
            Icon::Happy => "happy",
            Icon::Smile => "smile",
            Icon::Sad => "sad",
            Icon::Confused => "confused",
            Icon::Angry => "angry",
            Icon::Asleep => "asleep",
            Icon::Surprised => "surprised",
            Icon::Silly => "silly",
            Icon::Fabulous => "fabulous",
            Icon::Meh => "meh",
            Icon::Yes => "yes",
            Icon::No => "no",
            Icon::Triangle => "triangle",
            Icon::LeftTriangle => "left-triangle",
            Icon::Chessboard => "chessboard",
            Icon::Diamond => "diamond",
            Icon::SmallDiamond => "small-diamond",
            Icon::Square => "square",
            Icon::SmallSquare => "small-square",
            Icon::Rabbit => "rabbit",
            Icon::Cow => "cow",
            Icon::QuarterNote => "quarter-note",
            Icon::EighthNote => "eighth-note",
            Icon::Pitchfork => "pitchfork",
            Icon::Xmas => "xmas",
            Icon::Pacman => "pacman",
            Icon::Target => "target",
            Icon::TShirt => "tshirt",
            Icon::Rollerskate => "rollerskate",
            Icon::Duck => "duck",
            Icon::House => "house",
            Icon::Tortoise => "tortoise",
            Icon::Butterfly => "butterfly",
            Icon::StickFigure => "stick-figure",
            Icon::Ghost => "ghost",
            Icon::Sword => "sword",
            Icon::Giraffe => "giraffe",
            Icon::Skull => "skull",
            Icon::Umbrella => "umbrella",
            Icon::Snake => "snake",
        }
    }

    /// The encoded image string.
    pub fn encoded(self) -> &'static str {
        match self {
            Icon::Heart => "09090:99999:99999:09990:00900",
            Icon::SmallHeart => "00000:09090:09990:00900:00000",
            Icon::Happy => "00000:09090:00000:90009:09990",
            Icon::Smile => "00000:00000:00000:90009:09990",
            Icon::Sad => "00000:09090:00000:09990:90009",
            Icon::Confused => "00000:09090:00000:09090:90909",
            Icon::Angry => "90009:09090:00000:99999:90909",
            Icon::Asleep => "00000:99099:00000:09990:00000",
            Icon::Surprised => "09090:00000:00900:09090:00900",
            Icon::Silly => "90009:00000:99999:00909:00999",
            Icon::Fabulous => "99999:99099:00000:09090:09990",
            Icon::Meh => "09090:00000:00090:00900:09000",
            Icon::Yes => "00000:00009:00090:90900:09000",
            Icon::No => "90009:09090:00900:09090:90009",
            Icon::Triangle => "00000:00900:09090:99999:00000",
            Icon::LeftTriangle => "90000:99000:90900:90090:99999",
            Icon::Chessboard => "09090:90909:09090:90909:09090",
            Icon::Diamond => "00900:09090:90009:09090:00900",
            Icon::SmallDiamond => "00000:00900:09090:00900:00000",
            Icon::Square => "99999:90009:90009:90009:99999",
            Icon::SmallSquare => "00000:09990:09090:09990:00000",
            Icon::Rabbit => "90900:90900:99990:99090:99990",
            Icon::Cow => "90009:90009:99999:09990:00900",
            Icon::QuarterNote => "00900:00900:00900:99900:99900",
            Icon::EighthNote => "00900:00990:00909:99900:99900",
            Icon::Pitchfork => "90909:90909:99999:00900:00900",
            Icon::Xmas => "00900:09990:00900:09990:99999",
            Icon::Pacman => "09999:99090:99900:99990:09999",
            Icon::Target => "00900:09990:99099:09990:00900",
            Icon::TShirt => "99099:99999:09990:09990:09990",
            Icon::Rollerskate => "00099:00099:99999:99999:09090",
            Icon::Duck => "09900:99900:09999:09990:00000",
            Icon::House => "00900:09990:99999:09990:09090",
            Icon::Tortoise => "00000:09990:99999:09090:00000",
            Icon::Butterfly => "99099:99999:00900:99999:99099",
            Icon::StickFigure => "00900:99999:00900:09090:90009",
            Icon::Ghost => "99999:90909:99999:99999:90909",
            Icon::Sword => "00900:00900:00900:09990:00900",
            Icon::Giraffe => "99000:09000:09000:09990:09090",
            Icon::Skull => "09990:90909:99999:09990:09990",
            Icon::Umbrella => "09990:99999:00900:90900:09900",
            Icon::Snake => "99000:99099:09090:09990:00000",
        }
    }

    /// Decodes the icon into its grid.
    pub fn grid(self) -> PixelGrid {
        decode(self.encoded())
    }
}

fn registry() -> &'static IndexMap<&'static str, Icon> {
    static REGISTRY: OnceLock<IndexMap<&'static str, Icon>> = OnceLock::new();
    REGISTRY.get_or_init(|| Icon::ALL.into_iter().map(|icon| (icon.name(), icon)).collect())
}

/// All icons in gallery order.
pub fn all() -> impl Iterator<Item = Icon> {
    Icon::ALL.into_iter()
}

/// Looks an icon up by catalog name, ignoring ASCII case.
///
/// Examples:
/// - `by_name("heart") -> Some(Icon::Heart)`
/// - `by_name("Small-Heart") -> Some(Icon::SmallHeart)`
/// - `by_name("dragon") -> None`
pub fn by_name(name: &str) -> Option<Icon> {
    registry().get(name.to_ascii_lowercase().as_str()).copied()
}
