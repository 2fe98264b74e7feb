use handlebars::Handlebars;
use std::sync::Arc;

pub type Hbs = Arc<Handlebars<'static>>;

/// Loads every layout, page and partial from `dir`.
///
/// Panics on a missing or malformed template; the server cannot render anything
/// without them, so this only runs at startup.
pub fn build_handlebars(dir: &str) -> Hbs {
    let mut hb = Handlebars::new();
    hb.set_strict_mode(false);

    let file = |name: &str| format!("{dir}/{name}.hbs");

    // Layout + pages
    hb.register_template_file("layouts/base", file("layouts/base"))
        .expect("template layouts/base");

    hb.register_template_file("pages/dashboard", file("pages/dashboard"))
        .expect("template pages/dashboard");
    hb.register_template_file("pages/chat", file("pages/chat"))
        .expect("template pages/chat");
    hb.register_template_file("pages/portfolio", file("pages/portfolio"))
        .expect("template pages/portfolio");
    hb.register_template_file("pages/market", file("pages/market"))
        .expect("template pages/market");
    hb.register_template_file("pages/alerts", file("pages/alerts"))
        .expect("template pages/alerts");
    hb.register_template_file("pages/not_found", file("pages/not_found"))
        .expect("template pages/not_found");

    // Partial endpoints
    hb.register_template_file("partials/alerts_list", file("partials/alerts_list"))
        .expect("template partials/alerts_list");
    hb.register_template_file("partials/chat_messages", file("partials/chat_messages"))
        .expect("template partials/chat_messages");
    hb.register_template_file("partials/portfolio_holdings", file("partials/portfolio_holdings"))
        .expect("template partials/portfolio_holdings");
    hb.register_template_file("partials/query_result", file("partials/query_result"))
        .expect("template partials/query_result");

    let sidebar = std::fs::read_to_string(file("partials/sidebar")).expect("partials/sidebar.hbs");
    hb.register_partial("sidebar", sidebar).expect("register sidebar partial");

    let query_form =
        std::fs::read_to_string(file("partials/query_form")).expect("partials/query_form.hbs");
    hb.register_partial("query_form", query_form).expect("register query_form partial");

    Arc::new(hb)
}
