// All LLM prompt constants for the resume parsing module.

/// System prompt for resume parsing — enforces JSON-only output.
pub const RESUME_PARSE_SYSTEM: &str =
    "You are an expert resume parser. \
    Extract structured information from raw resume text. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Resume parsing prompt template. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"Extract the following structured JSON data from the given resume text, if available.

Return a JSON object with this EXACT schema:
{
  "name": "Full name of candidate",
  "email": "Primary email address",
  "phone": "Primary phone number",
  "linkedin": "LinkedIn URL if available",
  "github": "GitHub URL if available",
  "skills": ["List of skills"],
  "skills_matrix": [
    {
      "skills": "Skill name",
      "years_experience": "Years of experience",
      "proficiency": "Beginner/Intermediate/Advanced"
    }
  ],
  "certifications": [
    {"name": "Certification name", "issuer": "Issuing organization"}
  ],
  "summary": "Professional summary, objective statement, or candidate strengths if available",
  "education": [
    {
      "degree": "Degree name",
      "major": "Major/Field of study",
      "university": "University/Institution",
      "start_date": "YYYY or MM/YYYY if available",
      "end_date": "YYYY or MM/YYYY if available"
    }
  ],
  "experience": [
    {
      "job_title": "Title of the position",
      "company": "Employer name",
      "start_date": "YYYY or MM/YYYY",
      "end_date": "YYYY or MM/YYYY or 'Present'",
      "description": ["Bullet point list of responsibilities and achievements"]
    }
  ],
  "projects": [
    {
      "project_name": "Title of the project",
      "client": "Company or client if mentioned",
      "date_range": "YYYY-YYYY or MM/YYYY - MM/YYYY",
      "content": ["Content point 1.", "Point 2."],
      "technologies": "Technologies used, if available",
      "environment": "Environment if mentioned"
    }
  ],
  "awards": [
    {"name": "Award name", "issuer": "Issuing organization", "year": "YYYY"}
  ]
}

Rules:
- Return ONLY valid JSON.
- Only include "skills_matrix" entries when the resume itself presents skills with proficiency or years.
- If a field is missing, return an empty string or empty list as appropriate.
- Do not invent new information; extract only what is explicitly present in the resume.

Resume text:
{resume_text}
"#;
