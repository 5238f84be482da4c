//! Prompt templates sent to the LLM provider.

/// Builds the quiz-generation prompt from study material text.
pub fn quiz_prompt(subject: &str, level: &str, material_text: &str, num_questions: u32) -> String {
    format!(
        "You are an expert teacher creating educational quizzes. Create a {num_questions}-question quiz for {subject} at {level} level.

STUDY MATERIAL:
{material_text}

REQUIREMENTS:
1. Create {num_questions} multiple-choice questions with 4 options each
2. Clearly mark the correct answer with \"Correct Answer:\"
3. Make questions relevant to the provided study material
4. Include a mix of difficulty levels
5. Format each question clearly with numbering
6. Return only the quiz content without additional explanations

QUIZ FORMAT EXAMPLE:
1. What is the main topic covered in this material?
A) Option 1
B) Option 2
C) Option 3
D) Option 4
Correct Answer: A

2. [Next question...]"
    )
}

/// Material text used when a quiz is requested without any uploaded material.
pub fn fallback_material(subject: &str, level: &str) -> String {
    format!("General knowledge about {subject} for {level} level")
}

/// Builds the lecture-summarization prompt.
pub fn summary_prompt(subject: &str, lecture_number: i32, content: &str) -> String {
    format!(
        "Summarize the following lecture content for {subject}, Lecture {lecture_number}:

LECTURE CONTENT:
{content}

Please provide a concise educational summary that:
1. Captures the main concepts and key points
2. Is easy to understand for students
3. Highlights important definitions and examples
4. Is approximately 15-20% of the original text length
5. Maintains the core educational value
6. Uses clear, academic language

Return only the summary content without introductory text."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_prompt_embeds_parameters() {
        let prompt = quiz_prompt("Mathematics", "Intermediate", "Calculus basics", 5);
        assert!(prompt.contains("5-question quiz for Mathematics at Intermediate level"));
        assert!(prompt.contains("Calculus basics"));
    }

    #[test]
    fn test_summary_prompt_embeds_lecture_number() {
        let prompt = summary_prompt("History", 3, "The French Revolution");
        assert!(prompt.contains("History, Lecture 3"));
        assert!(prompt.contains("The French Revolution"));
    }
}
