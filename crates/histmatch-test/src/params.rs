//! Regression test parameters and operations

use histmatch_core::Numa;

/// Regression test parameters
///
/// Tracks the test name, the index of the current comparison and every
/// recorded failure. Comparisons never panic; call [`RegParams::cleanup`]
/// at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "bincount")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta || diff.is_nan() {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two numeric arrays element-wise within `delta`
    pub fn compare_numa(&mut self, expected: &Numa, actual: &Numa, delta: f64) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            let msg = format!(
                "Failure in {}_reg: numa comparison for index {} - length {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            );
            self.record_failure(msg);
            return false;
        }

        let bad = expected
            .iter()
            .zip(actual.iter())
            .position(|(e, a)| (e - a).abs() > delta || (e - a).is_nan());
        if let Some(i) = bad {
            let msg = format!(
                "Failure in {}_reg: numa comparison for index {} - element {}: expected {}, actual {}",
                self.test_name, self.index, i, expected[i], actual[i]
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two byte buffers for exact equality
    pub fn compare_bytes(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            let msg = format!(
                "Failure in {}_reg: byte comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            );
            self.record_failure(msg);
            return false;
        }

        if let Some(i) = expected.iter().zip(actual).position(|(e, a)| e != a) {
            let msg = format!(
                "Failure in {}_reg: byte comparison for index {} - mismatch at {}: {} vs {}",
                self.test_name, self.index, i, expected[i], actual[i]
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Record a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.record_failure(msg);
        }
        condition
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all comparisons passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
