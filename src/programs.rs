//! A small collection of predefined machines, ready to be run by pasting
//! their path into a browser and following the redirects.

use serde::Serialize;

/// Describes one predefined machine and the path that starts it.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramInfo {
    /// Short identifier for the machine.
    pub name: &'static str,
    /// What the machine does, one line.
    pub description: &'static str,
    /// The transition-table string.
    pub transitions: &'static str,
    /// The initial control state.
    pub state: &'static str,
    /// The initial tape with head marker.
    pub tape: &'static str,
}

impl ProgramInfo {
    /// Returns the request path that starts this machine.
    pub fn path(&self) -> String {
        format!("/{}/{}/{}", self.transitions, self.state, self.tape)
    }
}

lazy_static::lazy_static! {
    /// The built-in demo machines, listed on the server's index page.
    pub static ref PROGRAMS: Vec<ProgramInfo> = vec![
        ProgramInfo {
            name: "loop",
            description: "Scans right over 'loop' without changing it, halting off the end",
            transitions: "a(ll)>a;a(oo)>a;a(pp)>a",
            state: "a",
            tape: "|l|oop",
        },
        ProgramInfo {
            name: "flip",
            description: "Flips every bit while scanning right",
            transitions: "s(01)>s;s(10)>s",
            state: "s",
            tape: "|1|0110",
        },
        ProgramInfo {
            name: "eat",
            description: "Deletes every other 'x' cell via the empty-replacement rule",
            transitions: "e(x)>e",
            state: "e",
            tape: "|x|xxxx",
        },
    ];
}
