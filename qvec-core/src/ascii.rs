//! ASCII circuit renderer for terminal visualization
//!
//! A read-only formatter over [`Circuit::operations`]: one labeled wire
//! per qubit, one column per operation, control dots and vertical
//! connectors for two-qubit gates. It never mutates circuit state.
//!
//! # Example
//! ```
//! use qvec_core::Circuit;
//!
//! let mut circuit = Circuit::new(2);
//! circuit.h(0).unwrap().cx(0, 1).unwrap();
//! let diagram = circuit.to_ascii();
//! assert!(diagram.contains("q0:"));
//! ```

use crate::gate::GateKind;
use crate::{Circuit, GateOp};

/// Configuration for ASCII rendering
#[derive(Debug, Clone)]
pub struct AsciiConfig {
    /// Show qubit labels (q0:, q1:, ...)
    pub show_labels: bool,
    /// Use Unicode box-drawing and control characters
    pub unicode: bool,
    /// Precision for rotation angles
    pub float_precision: usize,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            show_labels: true,
            unicode: true,
            float_precision: 2,
        }
    }
}

impl AsciiConfig {
    /// ASCII-only characters for maximum terminal compatibility
    pub fn ascii_only() -> Self {
        Self {
            unicode: false,
            ..Default::default()
        }
    }

    fn wire(&self) -> char {
        if self.unicode {
            '─'
        } else {
            '-'
        }
    }

    fn control(&self) -> char {
        if self.unicode {
            '●'
        } else {
            '*'
        }
    }

    fn connector(&self) -> char {
        if self.unicode {
            '│'
        } else {
            '|'
        }
    }

    fn cross(&self) -> char {
        if self.unicode {
            '×'
        } else {
            'x'
        }
    }
}

/// What an operation draws on each wire it touches
fn cells_for(op: &GateOp, config: &AsciiConfig) -> Vec<(usize, String)> {
    let qubits = op.qubits();
    let boxed = |symbol: &str| format!("[{}]", symbol);

    match op.kind() {
        GateKind::Cx => vec![
            (qubits[0].index(), config.control().to_string()),
            (qubits[1].index(), boxed("X")),
        ],
        GateKind::Cy => vec![
            (qubits[0].index(), config.control().to_string()),
            (qubits[1].index(), boxed("Y")),
        ],
        GateKind::Cz => vec![
            (qubits[0].index(), config.control().to_string()),
            (qubits[1].index(), config.control().to_string()),
        ],
        GateKind::Swap => vec![
            (qubits[0].index(), config.cross().to_string()),
            (qubits[1].index(), config.cross().to_string()),
        ],
        GateKind::ISwap => vec![
            (qubits[0].index(), boxed("iSW")),
            (qubits[1].index(), boxed("iSW")),
        ],
        kind => {
            let symbol = match op.parameter() {
                Some(theta) => format!(
                    "{}({:.prec$})",
                    kind.symbol(),
                    theta,
                    prec = config.float_precision
                ),
                None => kind.symbol().to_string(),
            };
            vec![(qubits[0].index(), boxed(&symbol))]
        }
    }
}

fn pad_wire(cell: &str, width: usize, wire: char) -> String {
    let len = cell.chars().count();
    let total = width.saturating_sub(len);
    let left = total / 2;
    let right = total - left;
    let mut out = String::new();
    for _ in 0..left {
        out.push(wire);
    }
    out.push_str(cell);
    for _ in 0..right {
        out.push(wire);
    }
    out
}

fn pad_gap(cell: char, width: usize) -> String {
    let total = width.saturating_sub(1);
    let left = total / 2;
    let right = total - left;
    let mut out = String::new();
    for _ in 0..left {
        out.push(' ');
    }
    out.push(cell);
    for _ in 0..right {
        out.push(' ');
    }
    out
}

/// Render a circuit as a text diagram with the given configuration
pub fn render_with_config(circuit: &Circuit, config: &AsciiConfig) -> String {
    let n = circuit.num_qubits();
    let wire = config.wire();

    // Labels padded to a common width so columns stay aligned past q9
    let label_width = if config.show_labels {
        format!("q{}: ", n - 1).chars().count()
    } else {
        0
    };

    // 2n-1 rows: wires interleaved with connector gap rows
    let mut rows: Vec<String> = Vec::with_capacity(2 * n - 1);
    for q in 0..n {
        let mut row = if config.show_labels {
            format!("{:<width$}", format!("q{}: ", q), width = label_width)
        } else {
            String::new()
        };
        row.push(wire);
        rows.push(row);
        if q + 1 < n {
            rows.push(" ".repeat(label_width + 1));
        }
    }

    for op in circuit.operations() {
        let cells = cells_for(op, config);
        let width = cells
            .iter()
            .map(|(_, c)| c.chars().count())
            .max()
            .unwrap_or(1)
            .max(3);

        let (lo, hi) = {
            let indices: Vec<usize> = cells.iter().map(|(q, _)| *q).collect();
            (
                *indices.iter().min().unwrap(),
                *indices.iter().max().unwrap(),
            )
        };

        for q in 0..n {
            let cell = cells.iter().find(|(idx, _)| *idx == q).map(|(_, c)| c);
            let segment = match cell {
                Some(c) => pad_wire(c, width, wire),
                None => wire.to_string().repeat(width),
            };
            rows[2 * q].push_str(&segment);
            rows[2 * q].push(wire);
        }

        for gap in 0..n.saturating_sub(1) {
            let spans = lo <= gap && gap < hi;
            let segment = if spans {
                pad_gap(config.connector(), width)
            } else {
                " ".repeat(width)
            };
            rows[2 * gap + 1].push_str(&segment);
            rows[2 * gap + 1].push(' ');
        }
    }

    let mut out = String::new();
    for row in rows {
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// Render a circuit as a text diagram with default configuration
pub fn render(circuit: &Circuit) -> String {
    render_with_config(circuit, &AsciiConfig::default())
}

impl Circuit {
    /// Render this circuit as an ASCII diagram
    pub fn to_ascii(&self) -> String {
        render(self)
    }

    /// Render this circuit as an ASCII diagram with the given configuration
    pub fn to_ascii_with_config(&self, config: &AsciiConfig) -> String {
        render_with_config(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bell_circuit() {
        let mut circuit = Circuit::new(2);
        circuit.h(0).unwrap().cx(0, 1).unwrap();

        let diagram = circuit.to_ascii();
        assert!(diagram.contains("q0:"));
        assert!(diagram.contains("q1:"));
        assert!(diagram.contains("[H]"));
        assert!(diagram.contains("●"));
        assert!(diagram.contains("[X]"));
        assert!(diagram.contains("│"));
    }

    #[test]
    fn test_render_rotation_angle() {
        let mut circuit = Circuit::new(1);
        circuit.rx(0, std::f64::consts::PI / 4.0).unwrap();

        let diagram = circuit.to_ascii();
        assert!(diagram.contains("RX(0.79)"));
    }

    #[test]
    fn test_render_ascii_only() {
        let mut circuit = Circuit::new(2);
        circuit.cz(0, 1).unwrap();

        let diagram = circuit.to_ascii_with_config(&AsciiConfig::ascii_only());
        assert!(diagram.contains('*'));
        assert!(diagram.contains('|'));
        assert!(!diagram.contains('●'));
    }

    #[test]
    fn test_render_swap() {
        let mut circuit = Circuit::new(2);
        circuit.swap(0, 1).unwrap();

        let diagram = circuit.to_ascii();
        assert_eq!(diagram.matches('×').count(), 2);
    }

    #[test]
    fn test_untouched_wire_stays_plain() {
        let mut circuit = Circuit::new(3);
        circuit.h(0).unwrap();

        let diagram = circuit.to_ascii();
        let q2_line = diagram.lines().find(|l| l.starts_with("q2:")).unwrap();
        assert!(!q2_line.contains('['));
    }

    #[test]
    fn test_rows_per_qubit() {
        let mut circuit = Circuit::new(3);
        circuit.h(0).unwrap();
        // 3 wires + 2 gap rows
        assert_eq!(circuit.to_ascii().lines().count(), 5);
    }
}
