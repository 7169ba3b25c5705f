/// Progress observer the build orchestrator calls at lifecycle points.
///
/// `event` fires for the coarse steps (reset, asset copy, content loaded,
/// done); `detail` fires once per written page. Core pipeline components
/// never log on their own.
pub trait Reporter {
    fn event(&self, label: &str, message: &str);
    fn detail(&self, label: &str, message: &str);
}

pub struct ConsoleReporter {
    pub verbose: bool,
}

impl Reporter for ConsoleReporter {
    fn event(&self, label: &str, message: &str) {
        println!("[{label}] {message}");
    }

    fn detail(&self, label: &str, message: &str) {
        if self.verbose {
            println!("[{label}] {message}");
        }
    }
}
