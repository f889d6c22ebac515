//! Static table of decimal digits of π.
//!
//! Positions past the end of the table wrap around, so the sequence is
//! periodic with period [`PI_TABLE_LEN`]. Nothing here computes π; the table
//! is the whole source of digits.

/// The first 1001 decimal digits of π, starting with the leading `3`.
const PI_DIGITS: &str = "\
31415926535897932384626433832795028841971693993751058209749445923078164062862089\
98628034825342117067982148086513282306647093844609550582231725359408128481117450\
28410270193852110555964462294895493038196442881097566593344612847564823378678316\
52712019091456485669234603486104543266482133936072602491412737245870066063155881\
74881520920962829254091715364367892590360011330530548820466521384146951941511609\
43305727036575959195309218611738193261179310511854807446237996274956735188575272\
48912279381830119491298336733624406566430860213949463952247371907021798609437027\
70539217176293176752384674818467669405132000568127145263560827785771342757789609\
17363717872146844090122495343014654958537105079227968925892354201995611212902196\
08640344181598136297747713099605187072113499999983729780499510597317328160963185\
95024459455346908302642522308253344685035261931188171010003137838752886587533208\
38142061717766914730359825349042875546873115956286388235378759375195778185778053\
21712268066130019278766111959092164201989";

pub const PI_TABLE_LEN: usize = PI_DIGITS.len();

/// Digit of π at `index` (0-based, `0 => 3`), wrapping past the table end.
pub fn pi_digit_at(index: usize) -> u8 {
    PI_DIGITS.as_bytes()[index % PI_TABLE_LEN] - b'0'
}

/// First `count` digits of π, wrapping past the table end.
pub fn generate_pi_digits(count: usize) -> Vec<u8> {
    (0..count).map(pi_digit_at).collect()
}
