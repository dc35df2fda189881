//! Contact command handler: submit a message through the form relay.

use std::io::Read;

use atelier_api::{ContactForm, RelayClient};

use crate::cli::{ContactArgs, GlobalOpts};
use crate::error::{CliError, from_core};
use crate::output;

use super::util;

pub async fn handle(args: ContactArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = util::resolved_config(global)?;

    let message = match args.message {
        Some(m) => m,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let form = ContactForm {
        name: args.name,
        email: args.email,
        message,
    };
    if !form.is_complete() {
        return Err(CliError::IncompleteForm);
    }

    let client = RelayClient::new(&cfg.relay.endpoint, &util::transport(&cfg))
        .map_err(|e| from_core(e.into(), &cfg.site.domain))?;

    output::status_note("Sending ...", global.quiet);

    client
        .send_form(&cfg.relay.service_id, &cfg.relay.template_id, &form)
        .await
        .map_err(|e| from_core(e.into(), &cfg.site.domain))?;

    output::print_output("Message sent. Thank you, I will reply shortly.", global.quiet);
    Ok(())
}
