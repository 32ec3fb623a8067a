//! Bundled demonstration problems

/// A named demonstration problem in comma-separated form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demo {
    /// Comma-separated variable names
    pub variables: &'static str,
    /// Comma-separated minterm indices
    pub minterms: &'static str,
}

/// Four-variable textbook problems, including ones with tied minimal covers
pub const DEMOS: [Demo; 4] = [
    Demo {
        variables: "w,x,y,z",
        minterms: "1,4,5,6,12,14,15",
    },
    Demo {
        variables: "A,B,C,D",
        minterms: "2,3,6,7,12,13,14",
    },
    Demo {
        variables: "w,x,y,z",
        minterms: "1,3,4,5,6,7,9,11,13,15",
    },
    Demo {
        variables: "A,B,C,D",
        minterms: "0,2,4,5,6,7,8,10,13,15",
    },
];
