//! Conformance test helpers for the STIL toolchain.
//!
//! Provides a builder that writes well-formed STIL text, a reference source
//! exercising every block, and a flattened view of resolved vectors for
//! assertion in integration tests.

#![warn(missing_docs)]

use std::path::{Path, PathBuf};

use stil_common::{Direction, EventValue, StilError};
use stil_model::StilTest;

/// A complete STIL file with five groups, multi-valued bindings, a group
/// without its own waveform, and tester cycles given out of order.
pub const FULL_EXAMPLE: &str = r#"STIL 1.0;

Header {
    Title "full";
}

Signals {
    "clk" In; "rst_n" In;
    "din0" In; "din1" In;
    "dout0" Out; "dout1" Out;
}

SignalGroups {
    clk_grp = '"clk"';
    ctrl = '"rst_n"';
    din = '"din0" + "din1"';
    dout = '"dout0" + "dout1"';
    all_in = '"clk" + "rst_n" + "din0" + "din1"';
}

Timing RETARGET_timing {
    WaveformTable wft {
        Period '100ns';
        Waveforms {
            clk_grp { 01 { '0ns' D; '50ns' U/D; }}
            ctrl { 01N { '0ns' D/U/N; }}
            din { 01N { '10ns' D/U/N; }}
            dout { HLXT { '80ns' H/L/X/T; }}
        }
    }
}

PatternBurst burst {
    PatList { p; }
}

PatternExec {
    PatternBurst burst;
}

Pattern p {
    W wft;
    Ann {* TesterCycle:0 *}
    V {
        clk_grp = 1;
        ctrl = 0;
        din = 00;
        dout = XX;
    }
    Ann {* TesterCycle:2 *}
    V { din = 1N; dout = HL; }
    Ann {* TesterCycle:1 *}
    V {
        all_in = 1110;
        dout = LT;
    }
}
"#;

/// Builds STIL source text block by block.
#[derive(Clone, Debug)]
pub struct StilSource {
    title: String,
    signals: Vec<(String, Direction)>,
    groups: Vec<(String, Vec<String>)>,
    period: String,
    waveforms: Vec<String>,
    pattern: Vec<String>,
}

impl StilSource {
    /// Starts a source with the given title and a `100ns` period.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            signals: Vec::new(),
            groups: Vec::new(),
            period: "100ns".to_string(),
            waveforms: Vec::new(),
            pattern: Vec::new(),
        }
    }

    /// Declares a signal.
    pub fn signal(mut self, name: &str, direction: Direction) -> Self {
        self.signals.push((name.to_string(), direction));
        self
    }

    /// Declares a signal group.
    pub fn group(mut self, name: &str, members: &[&str]) -> Self {
        self.groups
            .push((name.to_string(), members.iter().map(|m| m.to_string()).collect()));
        self
    }

    /// Sets the period literal, e.g. `"250ps"`.
    pub fn period(mut self, period: &str) -> Self {
        self.period = period.to_string();
        self
    }

    /// Adds a waveform line: `<group> { <conditions> { <events> }}`.
    ///
    /// `events` is the raw event list, e.g. `"'0ns' D/U; '50ns' U;"`.
    pub fn waveform(mut self, group: &str, conditions: &str, events: &str) -> Self {
        self.waveforms
            .push(format!("{group} {{ {conditions} {{ {events} }}}}"));
        self
    }

    /// Adds a `TesterCycle` marker followed by a `V` block of assignments.
    pub fn cycle(mut self, tester_cycle: u64, assignments: &[(&str, &str)]) -> Self {
        self.pattern.push(format!("Ann {{* TesterCycle:{tester_cycle} *}}"));
        self.pattern.push("V {".to_string());
        for (group, values) in assignments {
            self.pattern.push(format!("    {group} = {values};"));
        }
        self.pattern.push("}".to_string());
        self
    }

    /// Renders the STIL text.
    pub fn build(&self) -> String {
        let mut out = String::from("STIL 1.0;\n\n");
        out.push_str(&format!("Header {{\n    Title \"{}\";\n}}\n\n", self.title));

        out.push_str("Signals {\n");
        for (name, direction) in &self.signals {
            out.push_str(&format!("    \"{name}\" {direction};\n"));
        }
        out.push_str("}\n\nSignalGroups {\n");
        for (name, members) in &self.groups {
            let quoted: Vec<String> = members.iter().map(|m| format!("\"{m}\"")).collect();
            out.push_str(&format!("    {name} = '{}';\n", quoted.join(" + ")));
        }
        out.push_str("}\n\n");

        out.push_str("Timing RETARGET_timing {\n    WaveformTable wft {\n");
        out.push_str(&format!("        Period '{}';\n", self.period));
        out.push_str("        Waveforms {\n");
        for line in &self.waveforms {
            out.push_str(&format!("            {line}\n"));
        }
        out.push_str("        }\n    }\n}\n\n");

        out.push_str("Pattern p {\n    W wft;\n");
        for line in &self.pattern {
            out.push_str(&format!("    {line}\n"));
        }
        out.push_str("}\n");
        out
    }

    /// Builds and parses the source.
    pub fn parse(&self) -> Result<StilTest, StilError> {
        stil_parser::parse_str(&self.build())
    }
}

/// One resolved event with its cycle, flattened for assertions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triple {
    /// The tester cycle.
    pub cycle: u64,
    /// Offset within the cycle, in the table unit.
    pub timestamp: u64,
    /// The signal name.
    pub signal: String,
    /// The force or compare value.
    pub value: EventValue,
}

/// Every resolved event of `test`, in iteration order.
pub fn triples(test: &StilTest) -> Vec<Triple> {
    let mut out = Vec::new();
    for vector in test.test_vectors() {
        for (&timestamp, events) in vector.events() {
            for event in events {
                out.push(Triple {
                    cycle: vector.tester_cycle(),
                    timestamp,
                    signal: test
                        .signal(event.signal)
                        .map(|s| s.name().to_string())
                        .unwrap_or_default(),
                    value: event.value,
                });
            }
        }
    }
    out
}

/// Writes `contents` to `<dir>/<name>` and returns the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}
