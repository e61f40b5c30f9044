use super::*;

fn config() -> IdentityConfig {
    IdentityConfig {
        domain: "tenant.us.auth0.com".to_owned(),
        client_id: "client-123".to_owned(),
        audience: "https://api.fintrack.example".to_owned(),
    }
}

#[test]
fn client_options_carry_domain_client_and_authorization_params() {
    let options = client_options(&config(), "https://app.fintrack.example");
    assert_eq!(
        options,
        serde_json::json!({
            "domain": "tenant.us.auth0.com",
            "clientId": "client-123",
            "authorizationParams": {
                "redirect_uri": "https://app.fintrack.example",
                "audience": "https://api.fintrack.example",
            },
        })
    );
}

#[test]
fn logout_options_return_to_the_given_origin() {
    assert_eq!(
        logout_options("https://app.fintrack.example"),
        serde_json::json!({ "logoutParams": { "returnTo": "https://app.fintrack.example" } })
    );
}
