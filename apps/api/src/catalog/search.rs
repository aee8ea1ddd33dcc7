use serde::{Deserialize, Serialize};

use crate::matching::normalize::normalize;
use crate::models::course::Course;
use crate::models::job::Job;

pub const DEFAULT_PER_PAGE: usize = 10;
pub const MAX_PER_PAGE: usize = 100;
pub const DEFAULT_COURSE_LIMIT: usize = 20;

/// Case-insensitive substring search over title, company, location, description
/// and required skills. A blank query matches every job.
pub fn search_jobs(jobs: &[Job], query: Option<&str>) -> Vec<Job> {
    let term = query.map(normalize).unwrap_or_default();
    if term.is_empty() {
        return jobs.to_vec();
    }

    jobs.iter()
        .filter(|job| {
            [&job.title, &job.company, &job.location, &job.description]
                .into_iter()
                .chain(job.skills_required())
                .any(|field| field.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

/// 1-based pagination. `per_page` is clamped to `1..=MAX_PER_PAGE`; a page past the
/// end comes back empty with the totals intact.
pub fn paginate<T>(items: Vec<T>, page: Option<usize>, per_page: Option<usize>) -> Page<T> {
    let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
    let page = page.unwrap_or(1).max(1);
    let total = items.len();
    let total_pages = total.div_ceil(per_page);

    let items = items
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();

    Page {
        items,
        total,
        page,
        per_page,
        total_pages,
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilter {
    pub platform: Option<String>,
    pub level: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseListing {
    pub courses: Vec<Course>,
    pub total: usize,
    pub shown: usize,
}

/// Keeps courses whose platform and level match the filter (case-insensitive),
/// then caps the result at `limit`. `total` counts matches before the cap.
pub fn filter_courses(courses: &[Course], filter: &CourseFilter) -> CourseListing {
    let platform = filter.platform.as_deref().map(normalize);
    let level = filter.level.as_deref().map(normalize);

    let matching: Vec<&Course> = courses
        .iter()
        .filter(|c| platform.as_ref().map_or(true, |p| normalize(&c.platform) == *p))
        .filter(|c| {
            level
                .as_ref()
                .map_or(true, |l| c.level.as_deref().map(normalize).as_ref() == Some(l))
        })
        .collect();

    let total = matching.len();
    let courses: Vec<Course> = matching
        .into_iter()
        .take(filter.limit.unwrap_or(DEFAULT_COURSE_LIMIT))
        .cloned()
        .collect();

    CourseListing {
        shown: courses.len(),
        courses,
        total,
    }
}
