use std::fmt::Display;

use bimap::BiMap;
use lazy_static::lazy_static;

lazy_static! {
    static ref KIND_NAME_BIMAP: BiMap<Kind, &'static str> = BiMap::from_iter([
        (Kind::Addr, "addr"),
        (Kind::Addi, "addi"),
        (Kind::Mulr, "mulr"),
        (Kind::Muli, "muli"),
        (Kind::Banr, "banr"),
        (Kind::Bani, "bani"),
        (Kind::Borr, "borr"),
        (Kind::Bori, "bori"),
        (Kind::Setr, "setr"),
        (Kind::Seti, "seti"),
        (Kind::Gtir, "gtir"),
        (Kind::Gtri, "gtri"),
        (Kind::Gtrr, "gtrr"),
        (Kind::Eqir, "eqir"),
        (Kind::Eqri, "eqri"),
        (Kind::Eqrr, "eqrr"),
    ]);
}

/// The sixteen opcode kinds. The kind alone fixes how each operand slot is
/// read (register reference vs. immediate); see [`super::Instruction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Addr,
    Addi,
    Mulr,
    Muli,

    Banr,
    Bani,
    Borr,
    Bori,

    Setr,
    Seti,

    Gtir,
    Gtri,
    Gtrr,

    Eqir,
    Eqri,
    Eqrr,
}

impl Kind {
    pub const ALL: [Kind; 16] = [
        Kind::Addr,
        Kind::Addi,
        Kind::Mulr,
        Kind::Muli,
        Kind::Banr,
        Kind::Bani,
        Kind::Borr,
        Kind::Bori,
        Kind::Setr,
        Kind::Seti,
        Kind::Gtir,
        Kind::Gtri,
        Kind::Gtrr,
        Kind::Eqir,
        Kind::Eqri,
        Kind::Eqrr,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        KIND_NAME_BIMAP.get_by_right(name).copied()
    }

    pub fn name(&self) -> &'static str {
        KIND_NAME_BIMAP
            .get_by_left(self)
            .expect("No name mapping for instruction kind")
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
