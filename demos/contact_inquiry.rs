//! Walks one tender inquiry through the contact form and prints the page
//! metadata the contact page would render.
//!
//! Run with: cargo run --example contact_inquiry --features serde

use tashra::form::{ContactFormData, Field};
use tashra::registry::{check_site, MetadataRegistry, Navigation, PageKey};
use tashra::site::{COMPANY, PRODUCT_CATEGORIES};
use tashra::submit::{ContactForm, FnSubmitter, SubmitError, SubmitOutcome};
use tashra::Validation;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let nav = Navigation::default();
    let registry = MetadataRegistry::from_env();
    if let Validation::Failure(violations) = check_site(&nav, &registry, PRODUCT_CATEGORIES) {
        for violation in violations {
            tracing::error!("{}", violation);
        }
        return;
    }

    // Stands in for a mail relay that only accepts government addresses.
    let relay = FnSubmitter::new(|data: ContactFormData| async move {
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        if data.email.trim().ends_with(".gov.in") {
            Ok(())
        } else {
            Err(SubmitError::new("relay rejected sender")
                .context(format!("sending inquiry from {}", data.organization.trim())))
        }
    });
    let mut form = ContactForm::with_submitter(relay);

    tracing::info!("{} inquiry form", COMPANY.display_name());
    form.change_field(Field::Name, "A");
    form.change_field(Field::Email, "procurement@example.com");
    report(form.submit().await);
    for (field, message) in form.state().errors().iter() {
        println!("  {:<13} {}", field.label(), message);
    }

    form.change_field(Field::Name, "Asha Verma");
    form.change_field(Field::Organization, "District Education Office, Sitapur");
    form.change_field(Field::Phone, "+91 98765 43210");
    form.change_field(Field::Requirements, "2,000 baby kit books, delivery by March");
    report(form.submit().await);

    form.change_field(Field::Email, "deo.sitapur@up.gov.in");
    report(form.submit().await);
    if let Some(banner) = form.state().status_banner() {
        println!("{}", banner);
    }

    let metadata = registry.build_metadata(PageKey::Contact);
    match serde_json::to_string_pretty(&metadata) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("could not serialize metadata: {}", e),
    }
}

fn report(outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Invalid(errors) => {
            tracing::info!("{} field(s) need attention", errors.len())
        }
        SubmitOutcome::Submitted => tracing::info!("inquiry delivered"),
        SubmitOutcome::Failed(e) => tracing::warn!("{}", e),
        SubmitOutcome::Busy => tracing::warn!("still submitting"),
    }
}
