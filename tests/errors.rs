use redraft::error::RedraftError;

fn transport(status: u16) -> RedraftError {
    RedraftError::Transport {
        message: format!("provider request failed with status {status}"),
        status: Some(status),
    }
}

#[test]
fn status_401_maps_to_invalid_api_key() {
    assert_eq!(transport(401).user_message(), "Invalid API key");
}

#[test]
fn status_429_maps_to_rate_limit() {
    assert_eq!(transport(429).user_message(), "Rate limit exceeded");
}

#[test]
fn status_404_maps_to_endpoint_hint() {
    assert_eq!(
        transport(404).user_message(),
        "API endpoint not found - check model name and API key"
    );
}

#[test]
fn unmapped_status_keeps_provider_message_verbatim() {
    let err = RedraftError::Transport {
        message: "OpenAI request failed with status 503".to_string(),
        status: Some(503),
    };

    assert_eq!(err.user_message(), "OpenAI request failed with status 503");
}

#[test]
fn statusless_transport_keeps_message_verbatim() {
    let err = RedraftError::Transport {
        message: "connection reset by peer".to_string(),
        status: None,
    };

    assert_eq!(err.user_message(), "connection reset by peer");
}

#[test]
fn no_api_key_gets_configuration_message() {
    assert_eq!(
        RedraftError::NoApiKey.user_message(),
        "No API key configured - set an OpenAI or Gemini API key"
    );
}

#[test]
fn empty_response_gets_fixed_message() {
    assert_eq!(
        RedraftError::EmptyResponse.user_message(),
        "Empty response from AI"
    );
}

#[test]
fn invalid_response_message_passes_through() {
    let err = RedraftError::InvalidResponse("no candidates in Gemini response".to_string());

    assert_eq!(err.user_message(), "no candidates in Gemini response");
}

#[test]
fn finish_reason_names_the_reason() {
    let msg = RedraftError::FinishReason("SAFETY".to_string()).user_message();

    assert!(msg.contains("SAFETY"));
}

#[test]
fn host_action_message_passes_through() {
    let err = RedraftError::HostAction("paste rejected".to_string());

    assert_eq!(err.user_message(), "paste rejected");
}

// ---------------------------------------------------------------------------
// Underlying reqwest failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn connection_refused_maps_to_network_message() {
    // Port 1 on loopback is never listening, so this fails at connect time
    // without touching any external network.
    let err = reqwest::Client::new()
        .post("http://127.0.0.1:1/chat/completions")
        .send()
        .await
        .expect_err("connect to a closed port must fail");
    assert!(err.is_connect());

    let wrapped = RedraftError::from(err);

    assert_eq!(wrapped.user_message(), "Network connection failed");
}
