// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the comparator network.
//!
//! Checks that the Batcher construction is a sorting network for several
//! widths, and therefore that every layout is reachable from some bits.

use rectnet::decode::base_array;
use rectnet::memo::network_for_width;
use rectnet::batcher_odd_even;
use std::collections::HashSet;

/// Advance to the next lexicographic permutation, returning false after
/// the last one.
fn next_permutation(items: &mut [usize]) -> bool {
    let Some(i) = (1..items.len()).rev().find(|&i| items[i - 1] < items[i]) else {
        return false;
    };
    let pivot = i - 1;
    let Some(j) = (i..items.len()).rev().find(|&j| items[j] > items[pivot]) else {
        return false;
    };
    items.swap(pivot, j);
    items[i..].reverse();
    true
}

#[test]
fn test_sorts_every_permutation_width_8() {
    let net = batcher_odd_even(8);
    let sorted: Vec<usize> = (0..8).collect();
    let mut reached = HashSet::new();
    let mut count = 0;

    let mut perm = sorted.clone();
    loop {
        let mut values = perm.clone();
        let bits = net.sort_recording(&mut values);
        assert_eq!(values, sorted, "failed to sort {:?}", perm);
        reached.insert(net.apply(&sorted, &bits).unwrap());
        count += 1;
        if !next_permutation(&mut perm) {
            break;
        }
    }

    assert_eq!(count, 40320);
    // Distinct inputs need distinct swap patterns, so applying those
    // patterns to the sorted array reaches every permutation.
    assert_eq!(reached.len(), 40320);
}

#[test]
fn test_sorts_binary_inputs_width_10() {
    // 0-1 principle: sorting every 0/1 input proves the network sorts.
    let net = batcher_odd_even(10);
    for mask in 0u32..(1 << 10) {
        let mut values: Vec<u32> = (0..10).map(|i| (mask >> i) & 1).collect();
        net.sort_recording(&mut values);
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "mask {:#b}", mask);
    }
}

#[test]
fn test_sorts_binary_inputs_width_28() {
    let net = batcher_odd_even(28);
    let mut state = 0x9e37_79b9_7f4a_7c15_u64;
    for _ in 0..2000 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let mut values: Vec<u64> = (0..28).map(|i| (state >> i) & 1).collect();
        net.sort_recording(&mut values);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_zero_bits_leave_base_unchanged() {
    for labels in 1..=10 {
        let net = network_for_width(2 * labels);
        let base = base_array(labels);
        let out = net.apply(&base, &vec![false; net.len()]).unwrap();
        assert_eq!(out, base);
    }
}

#[test]
fn test_comparators_ordered_and_in_range() {
    for width in (2..=32).step_by(2) {
        let net = batcher_odd_even(width);
        for c in net.comparators() {
            assert!(c.lo < c.hi && c.hi < width);
        }
    }
}
