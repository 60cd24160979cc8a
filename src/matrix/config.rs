//! Configuration and system parameters for sparse matrix construction

/// System parameters for row-parallel arithmetic
#[derive(Debug, Clone, PartialEq)]
pub struct SystemParameters {
    /// Number of threads to use; 1 disables row-parallel arithmetic
    pub n_threads: usize,
    /// Minimum number of output rows before rows are computed in parallel
    pub parallel_row_threshold: usize,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            n_threads: num_cpus::get(), // Use all available cores
            parallel_row_threshold: 64,
        }
    }
}

impl SystemParameters {
    /// Whether an operation producing `n_rows` output rows should run in parallel
    pub fn use_parallel(&self, n_rows: usize) -> bool {
        self.n_threads > 1 && n_rows >= self.parallel_row_threshold
    }
}

/// Configuration for a sparse matrix
///
/// Results of `transpose`, `add` and `mul` inherit the configuration of the
/// left operand.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixConfig {
    /// Reject insertions outside the declared shape
    pub check_bounds: bool,

    /// Reject insertions that would break the ascending row/column order
    /// of the chains. When disabled, such entries are appended anyway and a
    /// warning is logged; arithmetic on the matrix is then unspecified.
    pub check_order: bool,

    /// System parameters for performance tuning
    pub system_params: SystemParameters,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            check_bounds: true,
            check_order: true,
            system_params: SystemParameters::default(),
        }
    }
}

impl MatrixConfig {
    /// A config with bounds and order checking disabled
    pub fn unchecked() -> Self {
        Self {
            check_bounds: false,
            check_order: false,
            ..Self::default()
        }
    }

    /// A config that never computes rows in parallel
    pub fn sequential() -> Self {
        Self {
            system_params: SystemParameters {
                n_threads: 1,
                ..SystemParameters::default()
            },
            ..Self::default()
        }
    }
}
