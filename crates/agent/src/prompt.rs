//! Fixed text the agent speaks or is instructed with.

use helpdesk_core::context::SessionContext;

/// Compensation policy the model must follow.
pub const SUPPORT_RULES: [&str; 5] = [
    "Always check fraud status before offering any compensation",
    "If the user is flagged as fraudulent, do not offer any compensation",
    "For fraudulent users, explain that you cannot provide compensation due to account security measures",
    "For legitimate users, proceed with normal support process",
    "Always check delivery status and photos before making any decisions",
];

/// Reply used when the final model call returns no text.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I'm having trouble processing your request. Please try again.";

/// The system prompt for one model call, embedding the current context.
pub fn system_prompt(brand: &str, context: &SessionContext) -> String {
    let mut prompt = format!(
        "You are a {brand} customer support agent. Current customer information: {}\n\nImportant rules:\n",
        context.to_compact_json()
    );
    for (i, rule) in SUPPORT_RULES.iter().enumerate() {
        prompt.push_str(&format!("{}. {rule}\n", i + 1));
    }
    prompt
}

/// First assistant message of every session.
pub fn greeting(brand: &str) -> String {
    format!(
        "Welcome to {brand} Customer Support! I understand you're having an issue with your order. How can I help you today?"
    )
}

/// Operator-facing summary of the loaded case. Never sent to the model.
pub fn banner(context: &SessionContext) -> String {
    format!(
        "Customer Information Loaded:\nName: {}\nEmail: {}\nOrder ID: {}",
        context.customer_name().unwrap_or("unknown"),
        context.customer_email().unwrap_or("unknown"),
        context.current_order_id().unwrap_or("unknown"),
    )
}
