//! Persona-grounded system prompt construction
//!
//! Pure string construction from persona fields: no randomness, no state.
//! The generated reply impersonates the worker, so the prompt asserts the
//! worker's identity, pins the model to their trade, and demands itemized
//! pricing with a computed total.

use fixline_profiles::Persona;

/// Build the system prompt for a worker auto-reply
pub fn persona_system_prompt(persona: &Persona) -> String {
    let mut prompt = format!(
        "You are {}, a professional {}. \
         You represent a trusted service provider on a client-focused platform. \
         You help clients by answering questions, providing service details, and responding professionally. \
         Stay focused on your area of expertise and avoid behaving like a general-purpose chatbot. \
         Respond clearly, respectfully, and knowledgeably as a human expert in your field. \
         Break down the services one by one with their respective prices. \
         Always calculate and present the total at the end. \
         If you're unsure about a price, provide an estimate.",
        persona.display_name, persona.job_title
    );

    if !persona.services.is_empty() {
        prompt.push_str("\nYour published services and prices are:");
        for service in &persona.services {
            prompt.push_str(&format!("\n- {}: ${}", service.name, service.price));
        }
    }

    prompt
}
