//! Server-shaped JSON payloads shared by tests across modules.

use serde_json::{json, Value};

pub fn staff_profile_json() -> Value {
    json!({
        "id": 7,
        "company_id": 3,
        "company_name": "Acme Corp",
        "first_name": "Asha",
        "last_name": "Rao",
        "email": "asha@acme.test",
        "phone": "555-0100",
        "alternate_phone": null,
        "gender": "female",
        "date_of_birth": null,
        "employee_code": "EMP-007",
        "department": "Talent",
        "designation": "Recruiter",
        "employment_type": "full-time",
        "date_of_joining": "2023-04-01",
        "experience_years": 5,
        "salary": "85000.00",
        "address_line1": "1 Main St",
        "address_line2": null,
        "city": "Pune",
        "state": "MH",
        "postal_code": "411001",
        "country": "India",
        "emergency_contact_name": "Ravi",
        "emergency_contact_phone": "555-0101",
        "status": "on-leave",
        "notes": null,
        "created_at": "2023-04-01T09:00:00Z"
    })
}

pub fn vacancy_json(id: i64, job_title: &str) -> Value {
    json!({
        "id": id,
        "company_id": 3,
        "created_by_staff_id": 7,
        "company_name": "Acme Corp",
        "created_by_name": "Asha Rao",
        "job_title": job_title,
        "department": "Analytics",
        "designation": null,
        "employment_type": "full-time",
        "openings": 2,
        "experience_min": "1.00",
        "experience_max": "3.00",
        "salary_min": "600000.00",
        "salary_max": "1200000.00",
        "currency": "INR",
        "location_type": "hybrid",
        "city": "Pune",
        "state": null,
        "country": "India",
        "application_deadline": null,
        "description": "Own dashboards end to end.",
        "responsibilities": null,
        "requirements": "2+ years SQL",
        "skills": "SQL, Python",
        "match_threshold": "65.00",
        "mcq_question_count": 0,
        "mcq_pass_threshold": "70.00",
        "status": "open",
        "created_at": "2024-05-01T08:00:00Z",
        "updated_at": "2024-05-01T08:00:00Z"
    })
}

pub fn application_json(id: i64) -> Value {
    json!({
        "id": id,
        "vacancy_id": 4,
        "company_id": 3,
        "candidate_id": 21,
        "resume_path": "/uploads/resumes/21.pdf",
        "cover_letter": null,
        "match_percentage": "82.456",
        "match_threshold": "65.00",
        "screening_result": "passed",
        "screening_notes": null,
        "mcq_required": 1,
        "mcq_total_questions": 10,
        "mcq_correct_answers": 8,
        "mcq_score_percentage": "80.00",
        "mcq_pass_threshold": "70.00",
        "mcq_status": "passed",
        "practical_round_status": "eligible",
        "status": "under_review",
        "applied_at": "2024-05-02T09:30:00Z",
        "job_title": "Data Analyst",
        "department": "Analytics",
        "employment_type": "full-time",
        "company_name": "Acme Corp",
        "candidate_name": "Meera Iyer",
        "candidate_email": "meera@example.test",
        "candidate_phone": "555-0199"
    })
}

pub fn company_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "legal_name": null,
        "registration_number": "REG-100",
        "tax_id": null,
        "industry": "Software",
        "website": "https://acme.test",
        "email": "hello@acme.test",
        "phone": "555-0000",
        "alternate_phone": null,
        "founded_date": "2010-01-01",
        "employee_count": "120",
        "company_size": "101-500",
        "description": null,
        "address_line1": "1 Main St",
        "address_line2": null,
        "city": "Pune",
        "state": "MH",
        "postal_code": "411001",
        "country": "India",
        "contact_person_name": "Kiran",
        "contact_person_designation": null,
        "contact_person_email": "kiran@acme.test",
        "contact_person_phone": "555-0001",
        "status": "active",
        "created_at": "2024-01-01T00:00:00Z"
    })
}

pub fn company_staff_json(id: i64) -> Value {
    let mut record = staff_profile_json();
    record["id"] = json!(id);
    record
}
