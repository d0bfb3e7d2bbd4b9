//! Scripted customer visit used by `--scenario`.

use bt_agent::CustomerEvent;
use bt_core::Position;

const QUERIES: [&str; 4] = [
    "안녕하세요",
    "계좌 개설하고 싶어요",
    "그리고 잔액 조회도 부탁드려요",
    "감사합니다",
];

/// A customer idles by the door for `wait_ticks` updates, walks up to the
/// counter, asks a few questions and leaves again.
pub fn visit(wait_ticks: u64) -> Vec<CustomerEvent> {
    let mut events = Vec::new();

    for _ in 0..wait_ticks {
        events.push(CustomerEvent::at(Position::new(8.0, 0.0, 6.0)));
    }
    // approach
    for i in 0..=6 {
        let t = i as f64 / 6.0;
        events.push(CustomerEvent::at(Position::new(8.0 - 7.0 * t, 0.0, 6.0 - 5.0 * t)));
    }
    for q in QUERIES {
        events.push(CustomerEvent::at(Position::new(1.0, 0.0, 1.0)).with_text(q));
    }
    // leave
    for i in 1..=8 {
        events.push(CustomerEvent::at(Position::new(1.0 - i as f64, 0.0, 1.0 + i as f64)));
    }
    events
}

#[cfg(test)]
mod tests {
    use bt_agent::{AgentBuilder, AgentState};
    use bt_core::{AgentConfig, AgentRng};

    use super::*;

    #[test]
    fn door_wait_covers_one_behavior_cycle() {
        let mut agent = AgentBuilder::new(AgentConfig::default())
            .rng(AgentRng::new(9))
            .build()
            .unwrap();
        let cycle = agent.patterns().cycle_ticks();
        let events = visit(cycle);

        for event in &events[..cycle as usize] {
            agent.update(event);
        }
        assert_eq!(agent.scheduler_cursor().current_index, 0);
        assert_eq!(agent.state(), AgentState::Idle);

        for event in &events[cycle as usize..] {
            agent.update(event);
        }
        assert_eq!(agent.state(), AgentState::Interacting);
        assert_eq!(agent.history().len(), QUERIES.len());
    }
}
