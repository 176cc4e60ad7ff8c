//! Plain-text message templates.

use learnhub_core::traits::mail::MailMessage;

/// Account activation message carrying the 4-digit code.
pub fn activation_email(to: &str, name: &str, code: &str) -> MailMessage {
    MailMessage {
        to: to.to_string(),
        subject: "Activate your account".to_string(),
        body: format!(
            "Hello {name},\n\n\
             Thank you for registering with LearnHub. To activate your account,\n\
             please enter the following code:\n\n\
             {code}\n\n\
             The code is valid for 5 minutes. If you did not register, you can\n\
             safely ignore this email.\n"
        ),
    }
}

/// Order confirmation sent after a successful purchase.
pub fn order_confirmation(
    to: &str,
    name: &str,
    order_ref: &str,
    course_name: &str,
    price: f64,
    date: &str,
) -> MailMessage {
    MailMessage {
        to: to.to_string(),
        subject: "Order confirmation".to_string(),
        body: format!(
            "Hello {name},\n\n\
             Thank you for your purchase. Here are your order details:\n\n\
             Order ID: {order_ref}\n\
             Course:   {course_name}\n\
             Price:    ${price}\n\
             Date:     {date}\n\n\
             You now have full access to the course from your profile.\n"
        ),
    }
}

/// Notice to a question author that someone replied to their question.
pub fn question_reply(to: &str, name: &str, course_name: &str, question_title: &str) -> MailMessage {
    MailMessage {
        to: to.to_string(),
        subject: "Question reply".to_string(),
        body: format!(
            "Hello {name},\n\n\
             You have a new reply to your question in \"{course_name}\":\n\n\
             {question_title}\n\n\
             Sign in to read the full answer.\n"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_email_contains_code() {
        let msg = activation_email("ana@example.com", "Ana", "4821");
        assert_eq!(msg.to, "ana@example.com");
        assert_eq!(msg.subject, "Activate your account");
        assert!(msg.body.contains("4821"));
        assert!(msg.body.contains("Hello Ana"));
    }

    #[test]
    fn test_order_confirmation_fields() {
        let msg = order_confirmation(
            "bo@example.com",
            "Bo",
            "9f8a2c",
            "Rust for the Web",
            49.99,
            "August 30, 2026",
        );
        assert!(msg.body.contains("Order ID: 9f8a2c"));
        assert!(msg.body.contains("Rust for the Web"));
        assert!(msg.body.contains("$49.99"));
        assert!(msg.body.contains("August 30, 2026"));
    }

    #[test]
    fn test_question_reply_names_question() {
        let msg = question_reply("cy@example.com", "Cy", "Intro to SQL", "What is a join?");
        assert_eq!(msg.subject, "Question reply");
        assert!(msg.body.contains("Intro to SQL"));
        assert!(msg.body.contains("What is a join?"));
    }
}
