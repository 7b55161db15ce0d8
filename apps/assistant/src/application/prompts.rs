// All LLM prompt templates for the assistant's three features.
// Placeholders are filled by llm_client::prompts::render_template.

/// Job description analysis. Replace: {job_description}, {format_instructions}
pub const JD_ANALYSIS_TEMPLATE: &str = r#"You are an expert job description analyst.
Analyze the following job description and extract structured information:
the job title, the required technical skills, the minimum years of experience
(a whole number, 0 if not stated), the tools and technologies mentioned, and
the soft skills the role asks for.

Job Description:
{job_description}

{format_instructions}

Provide the extracted information in the specified JSON format."#;

/// Resume gap analysis.
/// Replace: {job_title}, {required_skills}, {experience_required}, {tools},
///          {current_resume}, {format_instructions}
pub const RESUME_SUGGESTIONS_TEMPLATE: &str = r#"You are an experienced technical recruiter and resume coach.
Based on the job requirements and the current resume, generate improvement suggestions.

Job Requirements:
- Title: {job_title}
- Skills needed: {required_skills}
- Experience: {experience_required} years
- Tools: {tools}

Current Resume:
{current_resume}

Identify the skills the resume is missing, list concrete improvements to the
resume for this role, and summarize the overall fit including a percentage (0-100%).

{format_instructions}

Provide structured suggestions to improve the resume for this job position."#;

/// Cover letter. Replace: {candidate_name}, {job_title}, {company_name},
/// {key_achievements}, {job_requirements}
pub const COVER_LETTER_TEMPLATE: &str = r#"Write a professional cover letter for the following position:

Candidate Name: {candidate_name}
Job Title: {job_title}
Company: {company_name}

Key Achievements:
{key_achievements}

Job Requirements:
{job_requirements}

Instructions:
- Write a compelling cover letter (300-400 words)
- Highlight relevant experience
- Match key requirements from the job description
- Use a professional tone
- Include specific examples from the achievements
- Output only the cover letter text, no JSON or formatting markers

Cover Letter:"#;
