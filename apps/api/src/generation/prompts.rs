// Prompt templates for the generation flows.
// Placeholders are substituted with `.replace("{name}", value)`.

pub const JOB_DESCRIPTION_ROLE: &str =
    "You are an expert HR copywriter who writes clear, appealing job postings.";

pub const JOB_DESCRIPTION_PROMPT: &str = "\
Generate a comprehensive and appealing job description based on the provided job title and keywords.

The description must be Markdown and include these sections:
- **Job Summary:** A brief, engaging overview of the role.
- **Key Responsibilities:** A bulleted list of the main duties.
- **Qualifications:** A bulleted list of required skills, experience, and education.
- **Company Bio:** A short, generic paragraph about \"{company}\", a dynamic and innovative company.

Job Title: {job_title}
Keywords: {keywords}

Respond with a JSON object of the form:
{\"jobDescription\": \"<the full Markdown job description>\"}";

pub const RESUME_ROLE: &str =
    "You are an expert resume parser for an Applicant Tracking System.";

pub const RESUME_PROMPT: &str = "\
Extract structured information from the attached resume:
- Full name
- Email address
- Phone number
- A list of key skills (programming languages, software, soft skills)
- Work experience, each with job title, company and duration
- Education, each with institution, degree and year
- A concise 2-3 sentence summary of the applicant's profile

Respond with a JSON object of the form:
{
  \"name\": \"\",
  \"email\": \"\",
  \"phone\": \"\",
  \"skills\": [\"\"],
  \"experience\": [{\"title\": \"\", \"company\": \"\", \"duration\": \"\"}],
  \"education\": [{\"institution\": \"\", \"degree\": \"\", \"year\": \"\"}],
  \"resumeSummary\": \"\"
}";

pub const SKILLS_ROLE: &str =
    "You are an HR expert who helps employees plan their growth within the company.";

pub const SKILLS_PROMPT: &str = "\
Given the employee's current skills and job description, suggest similar skills that could help them grow within the company.

Employee Skills: {employee_skills}
Job Description: {job_description}

Respond with a JSON object of the form:
{\"suggestedSkills\": \"<comma separated list of skills>\"}";
