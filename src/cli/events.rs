//! Event and RSVP screens

use clap::Subcommand;

use super::{dash, Context};
use crate::common::Result;
use crate::events::client::DEFAULT_PAGE_SIZE;
use crate::events::{
    AttendanceCoordinator, AttendanceStatus, EventCreate, EventPhase, EventUpdate, EventsClient,
    RsvpAction,
};

#[derive(Subcommand)]
pub enum EventCommand {
    List {
        club: i64,
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: u32,
    },
    Show {
        club: i64,
        id: i64,
    },
    /// Create an event (admin only)
    Create {
        club: i64,
        name: String,
        description: String,
        /// ISO start date, e.g. 2026-09-12T10:00:00
        starts_at: String,
        #[arg(long)]
        ends_at: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        kind: Option<String>,
        /// Maximum attendees; beyond it registrations join the waitlist
        #[arg(long)]
        capacity: Option<u32>,
    },
    Update {
        club: i64,
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        starts_at: Option<String>,
        #[arg(long)]
        ends_at: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        capacity: Option<u32>,
    },
    Delete {
        club: i64,
        id: i64,
    },
    /// Who is going (registered and waitlisted)
    Attendees {
        club: i64,
        id: i64,
    },
    /// My RSVP status for an event
    Status {
        club: i64,
        id: i64,
    },
    /// Register for an event (may land on the waitlist when full)
    Register {
        club: i64,
        id: i64,
    },
    /// Cancel my attendance
    Cancel {
        club: i64,
        id: i64,
    },
}

fn phase_tag(phase: EventPhase) -> &'static str {
    match phase {
        EventPhase::Upcoming => "upcoming",
        EventPhase::Ongoing => "ongoing",
        EventPhase::Finished => "finished",
    }
}

fn capacity_line(count: u32, capacity: Option<u32>) -> String {
    match capacity {
        Some(capacity) if count >= capacity => {
            format!("{}/{} seats (waitlist active)", count, capacity)
        }
        Some(capacity) => format!("{}/{} seats", count, capacity),
        None => format!("{} registered", count),
    }
}

pub async fn events(command: EventCommand, ctx: &Context) -> Result<()> {
    let client = EventsClient::new(ctx.api.clone());
    let now = chrono::Local::now().naive_local();

    match command {
        EventCommand::List { club, skip, limit } => {
            for event in client.list(club, skip, limit).await? {
                println!(
                    "{:>4}  {}  {}  [{}]  {}",
                    event.id,
                    event.starts_at,
                    event.name,
                    phase_tag(event.phase(now)),
                    capacity_line(event.registered_count, event.capacity)
                );
            }
        }
        EventCommand::Show { club, id } => {
            let event = client.get(club, id).await?;
            println!("# {} [{}]", event.name, phase_tag(event.phase(now)));
            println!("  starts:   {}", event.starts_at);
            println!("  ends:     {}", dash(&event.ends_at));
            println!("  location: {}", dash(&event.location));
            println!(
                "  seats:    {}",
                capacity_line(event.registered_count, event.capacity)
            );
            println!();
            println!("{}", event.description);
        }
        EventCommand::Create {
            club,
            name,
            description,
            starts_at,
            ends_at,
            location,
            kind,
            capacity,
        } => {
            let event = client
                .create(
                    club,
                    EventCreate {
                        name,
                        description,
                        kind,
                        starts_at,
                        ends_at,
                        start_time: None,
                        end_time: None,
                        location,
                        capacity,
                        requirements: None,
                        image_url: None,
                        comments_enabled: None,
                    },
                )
                .await?;
            println!("Created event \"{}\" (id {})", event.name, event.id);
        }
        EventCommand::Update {
            club,
            id,
            name,
            description,
            starts_at,
            ends_at,
            location,
            capacity,
        } => {
            let event = client
                .update(
                    club,
                    id,
                    EventUpdate {
                        name,
                        description,
                        starts_at,
                        ends_at,
                        location,
                        capacity,
                        ..Default::default()
                    },
                )
                .await?;
            println!("Updated event \"{}\"", event.name);
        }
        EventCommand::Delete { club, id } => {
            let response = client.delete(club, id).await?;
            println!("{}", response.message);
        }
        EventCommand::Attendees { club, id } => {
            for attendance in client.attendees(club, id).await? {
                let name = attendance
                    .user
                    .as_ref()
                    .map(|u| u.full_name.as_str())
                    .unwrap_or("(unknown)");
                println!("{}  {}", name, attendance.status.label());
            }
        }
        EventCommand::Status { club, id } => {
            match client.my_attendance(club, id).await? {
                Some(attendance) => println!("{}", attendance.status.label()),
                None => println!("not registered"),
            }
        }
        EventCommand::Register { club, id } => {
            rsvp(&client, club, id, RsvpAction::Register).await?;
        }
        EventCommand::Cancel { club, id } => {
            rsvp(&client, club, id, RsvpAction::Cancel).await?;
        }
    }
    Ok(())
}

async fn rsvp(client: &EventsClient, club: i64, event_id: i64, action: RsvpAction) -> Result<()> {
    let event = client.get(club, event_id).await?;
    let mut coordinator = AttendanceCoordinator::load(client.clone(), &event).await?;

    let result = coordinator.set_status(action).await?;
    match (action, result) {
        (RsvpAction::Register, AttendanceStatus::Waitlisted) => {
            println!("Event is full, you are on the waitlist");
        }
        (RsvpAction::Register, _) => println!("Registered"),
        (RsvpAction::Cancel, _) => println!("Attendance cancelled"),
    }
    println!(
        "{}",
        capacity_line(coordinator.registered_count(), coordinator.capacity())
    );
    Ok(())
}
