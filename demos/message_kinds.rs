use mqtt_envelope::{MessageBuilder, MethodError, MethodReturnCode};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let signal = MessageBuilder::signal_message("devices/42/alert", &json!({"level": 2}))?;
    println!("signal: {:?}", signal);

    let status = MessageBuilder::status_message("devices/42/status", &json!({"online": true}), 300)?;
    println!("status: {:?}", status);

    let request = MessageBuilder::request_message(
        "devices/42/methods/restart",
        &json!({"delay_seconds": 5}),
        "clients/7/replies",
        None,
    )?;
    println!("request: {:?}", request);

    let correlation_id = request.correlation_id.clone().unwrap();

    let response = MessageBuilder::response_message(
        "clients/7/replies",
        &json!({"accepted": true}),
        MethodReturnCode::Success.code(),
        correlation_id.clone(),
    )?;
    println!("response: {:?}", response);

    let failure = MethodError::new(MethodReturnCode::Timeout, "device did not answer");
    let error_response = failure.to_response_message("clients/7/replies", correlation_id)?;
    println!("error response: {:?}", error_response);

    let state = MessageBuilder::property_state_message("devices/42/props/mode", &json!("auto"), 3)?;
    println!("property state: {:?}", state);

    let update = MessageBuilder::property_update_request_message(
        "devices/42/props/mode/update",
        &json!("manual"),
        4,
        "clients/7/replies",
        None,
    )?;
    println!("property update request: {:?}", update);

    let update_reply = MessageBuilder::property_response_message(
        "clients/7/replies",
        &json!("manual"),
        4,
        MethodReturnCode::Success.code(),
        update.correlation_id.clone().unwrap(),
        None,
    )?;
    println!("property response: {:?}", update_reply);

    Ok(())
}
