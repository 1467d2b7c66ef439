//! The fixed instructional template sent to the model.

/// Builds the conversion prompt with the user's command embedded verbatim.
///
/// The reply shape is pinned to a single-field JSON object so the response
/// can be validated structurally instead of trusting free-form text.
pub fn build_prompt(curl_command: &str) -> String {
    format!(
        "You are an expert software developer, and convert curl commands to \
         Python code using the requests library.\n\n\
         Here is the curl command to convert:\n\
         {curl_command}\n\n\
         Return only the Python code, and do not include any other text. \
         Make sure the Python code is properly formatted and easy to read.\n\
         Respond with a JSON object of the form {{\"pythonCode\": \"<the Python code>\"}} \
         and nothing else."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_command_verbatim() {
        let command = "curl -X GET 'https://api.example.com/ping'";
        let prompt = build_prompt(command);
        assert!(prompt.contains(command));
    }

    #[test]
    fn pins_reply_shape_and_library() {
        let prompt = build_prompt("curl https://example.com");
        assert!(prompt.contains("requests library"));
        assert!(prompt.contains("\"pythonCode\""));
    }
}
