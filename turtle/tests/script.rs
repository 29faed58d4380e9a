// turtleworld/turtle/tests/script.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use turtleworld::{
    ColorU, Point2DI32, RunResultFlags, Scene, TurtleError, TurtleId, VirtualClock, World,
    WorldConfig,
};

fn world_with_turtle() -> (World<Scene, VirtualClock>, TurtleId) {
    let mut world = World::with_clock(Scene::new(), VirtualClock::new(), WorldConfig::default());
    let id = world.spawn(20, 20, 0.0, ColorU::RED).unwrap();
    (world, id)
}

#[test]
fn drives_the_turtle() {
    let (mut world, id) = world_with_turtle();
    let run = world
        .run_script(id, "forward 10\nturnleft\npencolor 0, 0, 255\nforward 10\n")
        .unwrap();
    assert!(run.result_flags.is_empty());

    let turtle = world.get(id).unwrap();
    assert_eq!(turtle.point(), Point2DI32::new(30, 10));
    assert!((turtle.heading().to_degrees() - 90.0).abs() < 1e-9);

    let lines: Vec<_> = world
        .host()
        .unwrap()
        .lines()
        .map(|(segment, color)| (segment.to(), color))
        .collect();
    assert_eq!(
        lines,
        vec![(Point2DI32::new(30, 20), ColorU::RED), (Point2DI32::new(30, 10), ColorU::BLUE)]
    );
}

#[test]
fn pen_and_teleports() {
    let (mut world, id) = world_with_turtle();
    world
        .run_script(id, "penup forward 5 pendown go 100 100 gox 50 goy 70 direction 270 forward 4")
        .unwrap();
    assert_eq!(world.get(id).unwrap().point(), Point2DI32::new(50, 74));
    assert_eq!(world.host().unwrap().lines().count(), 1);
}

#[test]
fn location_and_rotation_stacks() {
    let (mut world, id) = world_with_turtle();
    let run = world
        .run_script(id, "pushloc pushrot turnright 33.5 forward 40 poprot poploc")
        .unwrap();
    assert!(run.result_flags.is_empty());
    let turtle = world.get(id).unwrap();
    assert_eq!(turtle.point(), Point2DI32::new(20, 20));
    assert_eq!(turtle.heading(), 0.0);
}

#[test]
fn problems_are_flagged_without_stopping() {
    let (mut world, id) = world_with_turtle();
    let run = world.run_script(id, "poploc poprot speed 0 forward 3").unwrap();
    assert_eq!(
        run.result_flags,
        RunResultFlags::ERR_POPLOC_EMPTY_STACK
            | RunResultFlags::ERR_POPROT_EMPTY_STACK
            | RunResultFlags::ERR_INVALID_SPEED
    );
    assert_eq!(world.get(id).unwrap().point(), Point2DI32::new(23, 20));
    assert_eq!(world.get(id).unwrap().animation_speed(), 100);
}

#[test]
fn reset_clears_flags() {
    let (mut world, id) = world_with_turtle();
    let run = world.run_script(id, "poploc forward 9 pencolor 1,2,3 reset").unwrap();
    assert!(run.result_flags.is_empty());
    let turtle = world.get(id).unwrap();
    assert_eq!(turtle.point(), Point2DI32::new(20, 20));
    assert_eq!(turtle.color(), ColorU::RED);
}

#[test]
fn animation_can_be_switched_per_run() {
    let (mut world, id) = world_with_turtle();
    world.run_script(id, "animate on speed 50 forward 2 animate off forward 2").unwrap();
    assert_eq!(world.get(id).unwrap().point(), Point2DI32::new(25, 20));
    assert_eq!(world.clock().pause_count(), 2);
    assert_eq!(world.clock().elapsed(), std::time::Duration::from_millis(40));
    assert!(!world.animations_enabled());
}

#[test]
fn text_commands() {
    let (mut world, id) = world_with_turtle();
    world.run_script(id, "print \"hi\" write \"abc\"").unwrap();
    assert_eq!(world.host().unwrap().text(), "hiabc");
    assert_eq!(world.get(id).unwrap().point(), Point2DI32::new(41, 20));
}

#[test]
fn parse_errors_leave_the_turtle_alone() {
    let (mut world, id) = world_with_turtle();
    match world.run_script(id, "forward 10 forward ten") {
        Err(TurtleError::Script(err)) => assert!(!err.message().is_empty()),
        other => panic!("unexpected {:?}", other.map(|run| run.result_flags)),
    }
    assert_eq!(world.get(id).unwrap().point(), Point2DI32::new(20, 20));
    assert_eq!(world.host().unwrap().redraw_count(), 0);
}
