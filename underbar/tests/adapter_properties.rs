use std::{
	cell::Cell,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
	time::Duration,
};
use underbar::{Config, Scheduler, TimerQueue, delay, memoize, once, shuffle, shuffle_with};

#[test]
fn once_fires_a_single_time() {
	let side_effects = Cell::new(0);
	let mut setup = once(|name: &str| {
		side_effects.set(side_effects.get() + 1);
		format!("ready: {name}")
	});
	let results = ["a", "b", "c", "d", "e"].map(|name| setup.call(name));
	assert!(results.iter().all(|r| r == "ready: a"));
	assert_eq!(side_effects.get(), 1);
}

#[test]
fn memoize_computes_once_per_argument_list() {
	let computations = Cell::new(0);
	let mut slow_add = memoize(|(a, b): (i64, i64)| {
		computations.set(computations.get() + 1);
		a + b
	});
	assert_eq!(slow_add.call((2, 3)), 5);
	assert_eq!(slow_add.call((2, 3)), 5);
	assert_eq!(computations.get(), 1);
	assert_eq!(slow_add.call((3, 2)), 5);
	assert_eq!(computations.get(), 2);
}

#[test]
fn shuffle_never_fails_and_permutes() {
	for length in 0..12 {
		let input: Vec<usize> = (0..length).collect();
		let mut output = shuffle(&input);
		output.sort_unstable();
		assert_eq!(output, input);
	}

	let config = Config {
		random_seed: Some(5),
		..Config::default()
	};
	let mut rng = config.rng();
	let words = vec!["x"; 3];
	assert_eq!(shuffle_with(&words, &mut rng), words);
}

#[test]
fn delay_fires_once_per_call_through_a_shared_queue() {
	let queue = Arc::new(TimerQueue::new());
	let fired = Arc::new(AtomicUsize::new(0));

	let counter = Arc::clone(&fired);
	let requeue = Arc::clone(&queue);
	delay(
		&queue,
		move |()| {
			counter.fetch_add(1, Ordering::SeqCst);
			let counter = Arc::clone(&counter);
			requeue
				.schedule(
					Duration::from_millis(2),
					Box::new(move || {
						counter.fetch_add(10, Ordering::SeqCst);
					}),
				)
				.unwrap();
		},
		Duration::from_millis(2),
		(),
	)
	.unwrap();

	assert_eq!(queue.run_until_idle(), 2);
	assert_eq!(fired.load(Ordering::SeqCst), 11);
}
