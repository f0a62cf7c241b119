#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use orgpress::common::AuthError;
use orgpress::models::*;
use orgpress::services::Authenticator;
use orgpress::store::{Clock, EntityStore, Seed, SequentialIds};

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
}

/// A clock the test moves by hand.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(at) }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub fn store_with_seed(seed: Seed) -> (EntityStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(fixed_time()));
    let store = EntityStore::with_sources(
        seed,
        Box::new(SequentialIds::starting_at(1)),
        clock.clone(),
    );
    (store, clock)
}

pub fn get_seed() -> Seed {
    Seed {
        events: vec![Event {
            id: 1,
            title: "Welcome Evening".into(),
            date: "2026-09-12".into(),
            time: "19:00".into(),
            location: "Atrium".into(),
            description: "Meet the team.".into(),
            image_url: String::new(),
        }],
        team_members: vec![
            TeamMember {
                id: 2,
                name: "Amara Okafor".into(),
                role: "President".into(),
                bio: "Chairs the board.".into(),
                image_url: String::new(),
            },
            TeamMember {
                id: 3,
                name: "Jonas Lindqvist".into(),
                role: "Treasurer".into(),
                bio: "Keeps the books.".into(),
                image_url: String::new(),
            },
        ],
        partners: vec![Partner {
            id: 40,
            name: "City Library".into(),
            logo_url: "/library.png".into(),
            website_url: String::new(),
        }],
        ..Default::default()
    }
}

pub fn new_event() -> EventCreate {
    EventCreate {
        title: "Grant Writing Workshop".into(),
        date: "2026-10-30".into(),
        time: "14:00".into(),
        location: "Online".into(),
        description: "Preparing funding applications.".into(),
        image_url: String::new(),
    }
}

pub fn new_team_member() -> TeamMemberCreate {
    TeamMemberCreate {
        name: "Lena Park".into(),
        role: "Secretary".into(),
        bio: "Takes the minutes.".into(),
        image_url: String::new(),
    }
}

pub fn new_blog_post() -> BlogPostCreate {
    BlogPostCreate {
        title: "Summer recap".into(),
        author: "Amara Okafor".into(),
        date: "2026-09-01".into(),
        excerpt: "Twelve events.".into(),
        content: "Thanks to all volunteers.".into(),
        image_url: String::new(),
    }
}

pub fn new_resource() -> ResourceCreate {
    ResourceCreate {
        title: "Statutes".into(),
        description: "Founding statutes.".into(),
        category: "Governance".into(),
        url: "https://example.org/statutes.pdf".into(),
    }
}

pub fn new_gallery_image() -> GalleryImageCreate {
    GalleryImageCreate {
        src: "/img/fair.jpg".into(),
        caption: "Summer fair".into(),
    }
}

pub fn new_submission() -> MembershipSubmissionCreate {
    MembershipSubmissionCreate {
        name: "Noor Haddad".into(),
        email: "noor@example.com".into(),
        phone: String::new(),
        membership_type: "Student".into(),
        message: "Happy to help at events.".into(),
    }
}

pub fn new_partner() -> PartnerCreate {
    PartnerCreate {
        name: "Harbour Trust".into(),
        logo_url: "/harbour.png".into(),
        website_url: "https://harbour.example".into(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCall {
    ChangePassword { old: String, new: String },
    ChangeUsername { password: String, new: String },
}

/// Records every call and answers with a fixed verdict.
pub struct MockAuth {
    pub username: String,
    pub accept: bool,
    pub calls: Vec<AuthCall>,
}

impl MockAuth {
    pub fn accepting() -> Self {
        Self {
            username: "admin".into(),
            accept: true,
            calls: Vec::new(),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            accept: false,
            ..Self::accepting()
        }
    }

    fn verdict(&self) -> Result<(), AuthError> {
        if self.accept {
            Ok(())
        } else {
            Err(AuthError::IncorrectPassword)
        }
    }
}

impl Authenticator for MockAuth {
    fn is_authenticated(&self) -> bool {
        true
    }

    fn current_username(&self) -> &str {
        &self.username
    }

    fn change_password(&mut self, old_password: &str, new_password: &str) -> Result<(), AuthError> {
        self.calls.push(AuthCall::ChangePassword {
            old: old_password.into(),
            new: new_password.into(),
        });
        self.verdict()
    }

    fn change_username(&mut self, password: &str, new_username: &str) -> Result<(), AuthError> {
        self.calls.push(AuthCall::ChangeUsername {
            password: password.into(),
            new: new_username.into(),
        });
        if self.accept {
            self.username = new_username.into();
        }
        self.verdict()
    }
}
