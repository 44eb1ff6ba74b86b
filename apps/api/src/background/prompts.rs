/// Prompt for the interview backdrop. The job title is inserted verbatim.
pub fn background_prompt(job_title: &str) -> String {
    format!(
        "Create a sleek, professional background for a job interview setting, \
         specifically themed for a {job_title} position. Use a dark, modern aesthetic \
         with subtle gradients or textures to maintain focus while conveying \
         professionalism and sophistication. Do not include any text or people in the image."
    )
}
