use crate::messages::{MessageCatalog, MessageId, PROJECT_URL, SUPPORT_URL};
use crate::screens::ScreenRegistry;

/// Top-level help text listing every registered screen.
pub struct UsagePrinter<'r> {
    registry: &'r ScreenRegistry,
    catalog: &'r dyn MessageCatalog,
}

impl<'r> UsagePrinter<'r> {
    pub fn new(registry: &'r ScreenRegistry, catalog: &'r dyn MessageCatalog) -> Self {
        Self { registry, catalog }
    }

    pub fn render(&self, app_name: &str, version: &str) -> String {
        let screens = self.registry.usage_list();
        let blocks = [
            self.catalog.render(
                MessageId::UsageHeader,
                &[("app_name", app_name), ("version", version)],
            ),
            self.catalog
                .render(MessageId::UsageSynopsis, &[("app_name", app_name)]),
            self.catalog
                .render(MessageId::UsageScreens, &[("screens", screens.as_str())]),
            self.catalog.render(MessageId::UsageOptions, &[]),
            self.catalog
                .render(MessageId::UsageScreenHelp, &[("app_name", app_name)]),
            self.catalog.render(
                MessageId::UsageFooter,
                &[("project_url", PROJECT_URL), ("support_url", SUPPORT_URL)],
            ),
        ];
        blocks.join("\n\n")
    }
}
