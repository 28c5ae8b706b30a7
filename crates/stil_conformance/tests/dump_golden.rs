//! Golden text dump of the reference source.

use stil_conformance::FULL_EXAMPLE;
use stil_model::dump;

const GOLDEN: &str = "\
StilTest 'full'
\tsignals:
\t\tclk: In
\t\trst_n: In
\t\tdin0: In
\t\tdin1: In
\t\tdout0: Out
\t\tdout1: Out
\tsignal groups:
\t\tclk_grp (In): clk
\t\tctrl (In): rst_n
\t\tdin (In): din0 din1
\t\tdout (Out): dout0 dout1
\t\tall_in (In): clk rst_n din0 din1
\twaveform table: 100ns
\t\twaveform clk_grp (In)
\t\t\tconditions: 0 1
\t\t\t'0ns': D
\t\t\t'50ns': U/D
\t\twaveform ctrl (In)
\t\t\tconditions: 0 1 N
\t\t\t'0ns': D/U/N
\t\twaveform din (In)
\t\t\tconditions: 0 1 N
\t\t\t'10ns': D/U/N
\t\twaveform dout (Out)
\t\t\tconditions: H L X T
\t\t\t'80ns': H/L/X/T
\ttest vectors:
\t\tcycle 0
\t\t\t'0ns': clk=D rst_n=D
\t\t\t'10ns': din0=D din1=D
\t\t\t'50ns': clk=U
\t\t\t'80ns': dout0=X dout1=X
\t\tcycle 1
\t\t\t'0ns': clk=D rst_n=U
\t\t\t'10ns': din0=U din1=D
\t\t\t'50ns': clk=U
\t\t\t'80ns': dout0=L dout1=T
\t\tcycle 2
\t\t\t'10ns': din0=U din1=N
\t\t\t'80ns': dout0=H dout1=L
";

#[test]
fn full_example_dump_matches_golden() {
    let test = stil_parser::parse_str(FULL_EXAMPLE).unwrap();
    assert_eq!(dump::render(&test), GOLDEN);
}

#[test]
fn dump_is_stable_across_parses() {
    let a = dump::render(&stil_parser::parse_str(FULL_EXAMPLE).unwrap());
    let b = dump::render(&stil_parser::parse_str(FULL_EXAMPLE).unwrap());
    assert_eq!(a, b);
}
