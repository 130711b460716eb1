use faraway_core::Aggregate;

/// Run one command against an aggregate: decide, then apply every decided
/// event in order. Returns the events so callers can journal them.
///
/// No IO and no async; the aggregate is mutated in place. A command that
/// decides to no events leaves the aggregate (including its version) untouched.
pub fn execute<A>(aggregate: &mut A, command: &A::Command) -> Result<Vec<A::Event>, A::Error>
where
    A: Aggregate,
{
    let events = aggregate.handle(command)?;
    for ev in &events {
        aggregate.apply(ev);
    }
    Ok(events)
}
