use clap::Args;
use identity_screen::config::AppConfig;
use identity_screen::error::AppError;
use identity_screen::intake::{FormField, FormState, ProxyClient, ResultView};

#[derive(Args, Debug, Default)]
pub(crate) struct CheckArgs {
    /// Full name of the person to screen
    #[arg(long, default_value = "")]
    pub(crate) full_name: String,
    /// Day of birth (1-31)
    #[arg(long, default_value = "")]
    pub(crate) birth_day: String,
    /// Month of birth (1-12)
    #[arg(long, default_value = "")]
    pub(crate) birth_month: String,
    /// Four digit year of birth
    #[arg(long, default_value = "")]
    pub(crate) birth_year: String,
    /// Country of citizenship
    #[arg(long, default_value = "")]
    pub(crate) country: String,
    /// Proxy base URL; falls back to SCREENING_API_ENDPOINT
    #[arg(long)]
    pub(crate) endpoint: Option<String>,
}

fn fill_form(args: CheckArgs) -> (FormState, Option<String>) {
    let CheckArgs {
        full_name,
        birth_day,
        birth_month,
        birth_year,
        country,
        endpoint,
    } = args;

    let mut form = FormState::new();
    for (field, value) in [
        (FormField::FullName, full_name),
        (FormField::BirthDay, birth_day),
        (FormField::BirthMonth, birth_month),
        (FormField::BirthYear, birth_year),
        (FormField::Country, country),
    ] {
        form.set(field, value);
    }

    (form, endpoint)
}

pub(crate) async fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let (mut form, endpoint) = fill_form(args);

    for (field, message) in form.errors() {
        eprintln!("{}: {}", field.key(), message);
    }
    let payload = form.try_begin_submit()?;

    let endpoint = match endpoint {
        Some(endpoint) => endpoint,
        None => AppConfig::load()?.client.api_endpoint,
    };
    let client = ProxyClient::with_base_url(endpoint);

    println!("Screening {} against {}", payload.full_name, client.check_url());
    let response = client.submit(&payload).await;
    form.record_response(response);

    print!("{}", ResultView::from_outcome(form.outcome()));
    Ok(())
}
