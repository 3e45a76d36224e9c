/// Console logger tagged with the component that emitted the line.
///
/// Nothing here is shown to the user; notifications go through the
/// screens' notice slots instead.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        gloo::console::debug!(Self::format(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(Self::format(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(Self::format(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(Self::format(component, message));
    }

    fn format(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_prefixes_component() {
        assert_eq!(
            Logger::format("teacher-directory", "loaded 10 rows"),
            "[teacher-directory] loaded 10 rows"
        );
    }
}
